//! Doctors menu

use super::report;
use crate::cli::prompt::Prompter;
use crate::domain::{Doctor, Result};
use crate::services::{DoctorService, Services};
use tokio::io::AsyncBufRead;

pub async fn run<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    services: &Services,
) -> Result<()> {
    loop {
        println!();
        println!("--- Doctors ---");
        println!("1. Create doctor");
        println!("2. Find doctor by ID");
        println!("3. List all doctors");
        println!("4. Update doctor");
        println!("5. Delete doctor");
        println!("6. Back");

        match prompter.line("Select an option: ").await?.as_str() {
            "1" => create(prompter, &services.doctors).await?,
            "2" => find(prompter, &services.doctors).await?,
            "3" => list(&services.doctors).await?,
            "4" => update(prompter, &services.doctors).await?,
            "5" => delete(prompter, &services.doctors).await?,
            "6" => return Ok(()),
            _ => println!("[ERROR] Unknown option."),
        }
    }
}

async fn create<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    doctors: &DoctorService,
) -> Result<()> {
    let doctor = Doctor::new(
        prompter.required("Doctor ID: ").await?,
        prompter.required("Name: ").await?,
    );

    match doctors.create(&doctor).await {
        Ok(true) => println!("[OK] Doctor created."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn find<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    doctors: &DoctorService,
) -> Result<()> {
    let id = prompter.required("Doctor ID: ").await?;

    match doctors.get(&id).await {
        Ok(doctor) => println!("{doctor}"),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn list(doctors: &DoctorService) -> Result<()> {
    match doctors.list().await {
        Ok(all) if all.is_empty() => println!("[EMPTY] No doctors recorded."),
        Ok(all) => {
            for doctor in all {
                println!("{doctor}");
            }
        }
        Err(e) => report(&e),
    }
    Ok(())
}

async fn update<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    doctors: &DoctorService,
) -> Result<()> {
    let id = prompter.required("Doctor ID: ").await?;

    let current = match doctors.get(&id).await {
        Ok(doctor) => doctor,
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

    match doctors.update(&updated).await {
        Ok(true) => println!("[OK] Doctor updated."),
        Ok(false) => println!("[INFO] Nothing was written."),
        Err(e) => report(&e),
    }
    Ok(())
}

async fn delete<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    doctors: &DoctorService,
) -> Result<()> {
    let id = prompter.required("Doctor ID: ").await?;

    match doctors.get(&id).await {
        Ok(doctor) => println!("{doctor}"),
        Err(e) => {
            report(&e);
            return Ok(());
        }
    }

    if !prompter.confirm("Delete this doctor? (y/n): ").await? {
        println!("[INFO] Delete cancelled.");
        return Ok(());
    }

    match doctors.delete(&id).await {
        Ok(true) => println!("[OK] Doctor deleted."),
        Ok(false) => println!("[INFO] Nothing was deleted."),
        Err(e) => report(&e),
    }
    Ok(())
}
