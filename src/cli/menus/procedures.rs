//! Procedures menu

use super::report;
use crate::cli::prompt::Prompter;
use crate::domain::{Procedure, Result};
use crate::services::{ProcedureService, Services};
use tokio::io::AsyncBufRead;

pub async fn run<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    services: &Services,
) -> Result<()> {
    loop {
        println!();
        println!("--- Procedures ---");
        println!("1. Create procedure");
        println!("2. Find procedure by ID");
        println!("3. List all procedures");
        println!("4. Update procedure");
        println!("5. Delete procedure");
        println!("6. Back");

        match prompter.line("Select an option: ").await?.as_str() {
            "1" => create(prompter, &services.procedures).await?,
            "2" => find(prompter, &services.procedures).await?,
            "3" => list(&services.procedures).await?,
            "4" => update(prompter, &services.procedures).await?,
            "5" => delete(prompter, &services.procedures).await?,
            "6" => return Ok(()),
            _ => println!("[ERROR] Unknown option."),
        }
    }
}

async fn create<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    procedures: &ProcedureService,
) -> Result<()> {
    let procedure = Procedure {
        id: prompter.required("Procedure ID: ").await?,
        name: prompter.required("Name: ").await?,
        description: prompter.required("Description: ").await?,
        duration: prompter.int("Duration (minutes): ").await?,
        doctor_id: prompter.required("Doctor ID: ").await?,
    };

    match procedures.create(&procedure).await {
        Ok(true) => println!("[OK] Procedure created."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn find<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    procedures: &ProcedureService,
) -> Result<()> {
    let id = prompter.required("Procedure ID: ").await?;

    match procedures.get(&id).await {
        Ok(procedure) => println!("{procedure}"),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn list(procedures: &ProcedureService) -> Result<()> {
    match procedures.list().await {
        Ok(all) if all.is_empty() => println!("[EMPTY] No procedures recorded."),
        Ok(all) => {
            for procedure in all {
                println!("{procedure}");
            }
        }
        Err(e) => report(&e),
    }
    Ok(())
}

async fn update<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    procedures: &ProcedureService,
) -> Result<()> {
    let id = prompter.required("Procedure ID: ").await?;

    let current = match procedures.get(&id).await {
        Ok(procedure) => procedure,
        Err(e) => {
            report(&e);
            return Ok(());
        }
    };

    println!("Current record: {current}");
    println!("Leave a field empty to keep its value.");

    let mut updated = current;
    if let Some(name) = prompter.optional("Name: ").await? {
        updated.name = name;
    }
    if let Some(description) = prompter.optional("Description: ").await? {
        updated.description = description;
    }
    if let Some(duration) = prompter.optional_int("Duration (minutes): ").await? {
        updated.duration = duration;
    }
    if let Some(doctor_id) = prompter.optional("Doctor ID: ").await? {
        updated.doctor_id = doctor_id;
    }

    match procedures.update(&updated).await {
        Ok(true) => println!("[OK] Procedure updated."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn delete<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    procedures: &ProcedureService,
) -> Result<()> {
    let id = prompter.required("Procedure ID: ").await?;

    match procedures.get(&id).await {
        Ok(procedure) => println!("{procedure}"),
        Err(e) => {
            report(&e);
            return Ok(());
        }
    }

    if !prompter.confirm("Delete this procedure? (y/n): ").await? {
        println!("[INFO] Delete cancelled.");
        return Ok(());
    }

    match procedures.delete(&id).await {
        Ok(true) => println!("[OK] Procedure deleted."),
        Ok(false) => println!("[INFO] Nothing was deleted."),
        Err(e) => report(&e),
    }
    Ok(())
}
