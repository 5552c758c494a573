//! Patient history menu

use super::report;
use crate::cli::prompt::Prompter;
use crate::domain::{PatientHistory, Result};
use crate::services::{PatientHistoryService, Services};
use tokio::io::AsyncBufRead;

pub async fn run<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    services: &Services,
) -> Result<()> {
    loop {
        println!();
        println!("--- Patient History ---");
        println!("1. Create record");
        println!("2. Find record by ID");
        println!("3. List all records");
        println!("4. List records for a patient");
        println!("5. Update record");
        println!("6. Delete record");
        println!("7. Back");

        match prompter.line("Select an option: ").await?.as_str() {
            "1" => create(prompter, &services.histories).await?,
            "2" => find(prompter, &services.histories).await?,
            "3" => list(&services.histories).await?,
            "4" => list_for_patient(prompter, &services.histories).await?,
            "5" => update(prompter, &services.histories).await?,
            "6" => delete(prompter, &services.histories).await?,
            "7" => return Ok(()),
            _ => println!("[ERROR] Unknown option."),
        }
    }
}

async fn create<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    histories: &PatientHistoryService,
) -> Result<()> {
    let history = PatientHistory {
        id: prompter.required("Record ID: ").await?,
        patient_id: prompter.int("Patient MRN: ").await?,
        procedure_id: prompter.required("Procedure ID: ").await?,
        date: prompter.date("Date (YYYY-MM-DD): ").await?,
        billing: prompter.decimal("Billing amount: ").await?,
        doctor_id: prompter.required("Doctor ID: ").await?,
    };

    match histories.create(&history).await {
        Ok(true) => println!("[OK] History record created."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn find<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    histories: &PatientHistoryService,
) -> Result<()> {
    let id = prompter.required("Record ID: ").await?;

    match histories.get(&id).await {
        Ok(history) => println!("{history}"),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn list(histories: &PatientHistoryService) -> Result<()> {
    match histories.list().await {
        Ok(all) if all.is_empty() => println!("[EMPTY] No history records."),
        Ok(all) => {
            for history in all {
                println!("{history}");
            }
        }
        Err(e) => report(&e),
    }
    Ok(())
}

async fn list_for_patient<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    histories: &PatientHistoryService,
) -> Result<()> {
    let mrn = prompter.int("Patient MRN: ").await?;

    match histories.list_by_patient(mrn).await {
        Ok(all) if all.is_empty() => println!("[EMPTY] No history records for this patient."),
        Ok(all) => {
            for history in all {
                println!("{history}");
            }
        }
        Err(e) => report(&e),
    }
    Ok(())
}

async fn update<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    histories: &PatientHistoryService,
) -> Result<()> {
    let id = prompter.required("Record ID: ").await?;

    let current = match histories.get(&id).await {
        Ok(history) => history,
        Err(e) => {
            report(&e);
            return Ok(());
        }
    };

    println!("Current record: {current}");
    println!("Leave a field empty to keep its value.");

    let mut updated = current;
    if let Some(patient_id) = prompter.optional_int("Patient MRN: ").await? {
        updated.patient_id = patient_id;
    }
    if let Some(procedure_id) = prompter.optional("Procedure ID: ").await? {
        updated.procedure_id = procedure_id;
    }
    if let Some(date) = prompter.optional_date("Date (YYYY-MM-DD): ").await? {
        updated.date = date;
    }
    if let Some(billing) = prompter.optional_decimal("Billing amount: ").await? {
        updated.billing = billing;
    }
    if let Some(doctor_id) = prompter.optional("Doctor ID: ").await? {
        updated.doctor_id = doctor_id;
    }

    match histories.update(&updated).await {
        Ok(true) => println!("[OK] History record updated."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn delete<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    histories: &PatientHistoryService,
) -> Result<()> {
    let id = prompter.required("Record ID: ").await?;

    match histories.get(&id).await {
        Ok(history) => println!("{history}"),
        Err(e) => {
            report(&e);
            return Ok(());
        }
    }

    if !prompter.confirm("Delete this record? (y/n): ").await? {
        println!("[INFO] Delete cancelled.");
        return Ok(());
    }

    match histories.delete(&id).await {
        Ok(true) => println!("[OK] History record deleted."),
        Ok(false) => println!("[INFO] Nothing was deleted."),
        Err(e) => report(&e),
    }
    Ok(())
}
