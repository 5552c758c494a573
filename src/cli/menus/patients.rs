//! Patients menu

use super::report;
use crate::cli::prompt::Prompter;
use crate::domain::{Patient, Result};
use crate::services::{PatientService, Services};
use tokio::io::AsyncBufRead;

pub async fn run<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    services: &Services,
) -> Result<()> {
    loop {
        println!();
        println!("--- Patients ---");
        println!("1. Create patient");
        println!("2. Find patient by MRN");
        println!("3. List all patients");
        println!("4. Update patient");
        println!("5. Delete patient");
        println!("6. Back");

        match prompter.line("Select an option: ").await?.as_str() {
            "1" => create(prompter, &services.patients).await?,
            "2" => find(prompter, &services.patients).await?,
            "3" => list(&services.patients).await?,
            "4" => update(prompter, &services.patients).await?,
            "5" => delete(prompter, &services.patients).await?,
            "6" => return Ok(()),
            _ => println!("[ERROR] Unknown option."),
        }
    }
}

async fn create<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    patients: &PatientService,
) -> Result<()> {
    let patient = Patient {
        mrn: prompter.int("MRN: ").await?,
        fname: prompter.required("First name: ").await?,
        lname: prompter.required("Last name: ").await?,
        dob: prompter.date("Date of birth (YYYY-MM-DD): ").await?,
        address: prompter.required("Address: ").await?,
        city: prompter.required("City: ").await?,
        state: prompter.required("State: ").await?,
        zip: prompter.int("ZIP code: ").await?,
        insurance: prompter.required("Insurance: ").await?,
        email: prompter.required("Email: ").await?,
    };

    match patients.create(&patient).await {
        Ok(true) => println!("[OK] Patient created."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn find<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    patients: &PatientService,
) -> Result<()> {
    let mrn = prompter.int("MRN: ").await?;

    match patients.get(mrn).await {
        Ok(patient) => println!("{patient}"),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn list(patients: &PatientService) -> Result<()> {
    match patients.list().await {
        Ok(all) if all.is_empty() => println!("[EMPTY] No patients recorded."),
        Ok(all) => {
            for patient in all {
                println!("{patient}");
            }
        }
        Err(e) => report(&e),
    }
    Ok(())
}

async fn update<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    patients: &PatientService,
) -> Result<()> {
    let mrn = prompter.int("MRN: ").await?;

    let current = match patients.get(mrn).await {
        Ok(patient) => patient,
        Err(e) => {
            report(&e);
            return Ok(());
        }
    };

    println!("Current record: {current}");
    println!("Leave a field empty to keep its value.");

    let mut updated = current;
    if let Some(fname) = prompter.optional("First name: ").await? {
        updated.fname = fname;
    }
    if let Some(lname) = prompter.optional("Last name: ").await? {
        updated.lname = lname;
    }
    if let Some(dob) = prompter.optional_date("Date of birth (YYYY-MM-DD): ").await? {
        updated.dob = dob;
    }
    if let Some(address) = prompter.optional("Address: ").await? {
        updated.address = address;
    }
    if let Some(city) = prompter.optional("City: ").await? {
        updated.city = city;
    }
    if let Some(state) = prompter.optional("State: ").await? {
        updated.state = state;
    }
    if let Some(zip) = prompter.optional_int("ZIP code: ").await? {
        updated.zip = zip;
    }
    if let Some(insurance) = prompter.optional("Insurance: ").await? {
        updated.insurance = insurance;
    }
    if let Some(email) = prompter.optional("Email: ").await? {
        updated.email = email;
    }

    match patients.update(&updated).await {
        Ok(true) => println!("[OK] Patient updated."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn delete<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    patients: &PatientService,
) -> Result<()> {
    let mrn = prompter.int("MRN: ").await?;

    match patients.get(mrn).await {
        Ok(patient) => println!("{patient}"),
        Err(e) => {
            report(&e);
            return Ok(());
        }
    }

    if !prompter.confirm("Delete this patient? (y/n): ").await? {
        println!("[INFO] Delete cancelled.");
        return Ok(());
    }

    match patients.delete(mrn).await {
        Ok(true) => println!("[OK] Patient deleted."),
        Ok(false) => println!("[INFO] Nothing was deleted."),
        Err(e) => report(&e),
    }
    Ok(())
}
