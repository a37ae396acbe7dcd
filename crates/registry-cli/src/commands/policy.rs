//! `policy` subcommands: fee policy CRUD.

use anyhow::Result;

use registry_model::{AdmissionPolicy, ClassPolicy, RegistrationPolicy};
use registry_store::RegistryDb;

use crate::cli::{
    PolicyCommand, SetAdmissionPolicyArgs, SetClassPolicyArgs, SetRegistrationPolicyArgs,
};
use crate::summary;

pub async fn run(db: &RegistryDb, command: PolicyCommand) -> Result<i32> {
    match command {
        PolicyCommand::SetRegistration(args) => set_registration(db, &args).await,
        PolicyCommand::SetAdmission(args) => set_admission(db, &args).await,
        PolicyCommand::SetClass(args) => set_class(db, &args).await,
        PolicyCommand::Show => show(db).await,
    }
}

async fn set_registration(db: &RegistryDb, args: &SetRegistrationPolicyArgs) -> Result<i32> {
    db.set_registration_policy(&RegistrationPolicy {
        fee: args.fee.trim().to_string(),
    })
    .await?;
    println!("Registration policy set: fee {}", args.fee.trim());
    Ok(0)
}

async fn set_admission(db: &RegistryDb, args: &SetAdmissionPolicyArgs) -> Result<i32> {
    db.set_admission_policy(&AdmissionPolicy {
        fee: args.fee.trim().to_string(),
        security_deposit: args.security_deposit.trim().to_string(),
    })
    .await?;
    println!(
        "Admission policy set: fee {}, security deposit {}",
        args.fee.trim(),
        args.security_deposit.trim()
    );
    Ok(0)
}

async fn set_class(db: &RegistryDb, args: &SetClassPolicyArgs) -> Result<i32> {
    db.set_class_policy(&ClassPolicy {
        class_name: args.class.trim().to_string(),
        monthly_fee: args.monthly_fee.trim().to_string(),
        annual_charges: args.annual_charges.trim().to_string(),
        other_charges: args.other_charges.trim().to_string(),
        computer_lab_charges: args.computer_lab_charges.trim().to_string(),
        lab_charges: args.lab_charges.trim().to_string(),
    })
    .await?;
    println!("General policy set for {}", args.class.trim());
    Ok(0)
}

async fn show(db: &RegistryDb) -> Result<i32> {
    match db.registration_policy().await? {
        Some(policy) => {
            println!("Registration Policy:");
            println!("  Registration Fee: {}", policy.fee);
        }
        None => println!("Registration Policy: not defined"),
    }

    println!();
    match db.admission_policy().await? {
        Some(policy) => {
            println!("Admission Policy:");
            println!("  Admission Fee: {}", policy.fee);
            println!("  Security Deposit: {}", policy.security_deposit);
        }
        None => println!("Admission Policy: not defined"),
    }

    println!();
    let class_policies = db.class_policies().await?;
    if class_policies.is_empty() {
        println!("General Policies (Class Wise): not defined");
    } else {
        println!("General Policies (Class Wise):");
        summary::print_class_policies(&class_policies);
    }
    Ok(0)
}
