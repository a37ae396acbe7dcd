//! Fee policy storage.
//!
//! Policies are configuration rows, not transactional data: the
//! registration and admission policies are singletons, class policies are
//! keyed by class name, and setting a policy overwrites the previous one.

use sqlx::Row;

use registry_model::{AdmissionPolicy, ClassPolicy, RegistrationPolicy};

use crate::db::RegistryDb;
use crate::error::Result;

impl RegistryDb {
    pub async fn set_registration_policy(&self, policy: &RegistrationPolicy) -> Result<()> {
        sqlx::query(
            "INSERT INTO registration_policy (id, fee) VALUES (1, ?) \
             ON CONFLICT(id) DO UPDATE SET fee = excluded.fee",
        )
        .bind(&policy.fee)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn registration_policy(&self) -> Result<Option<RegistrationPolicy>> {
        let fee: Option<String> =
            sqlx::query_scalar("SELECT fee FROM registration_policy WHERE id = 1")
                .fetch_optional(self.pool())
                .await?;
        Ok(fee.map(|fee| RegistrationPolicy { fee }))
    }

    pub async fn set_admission_policy(&self, policy: &AdmissionPolicy) -> Result<()> {
        sqlx::query(
            "INSERT INTO admission_policy (id, fee, security_deposit) VALUES (1, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             fee = excluded.fee, security_deposit = excluded.security_deposit",
        )
        .bind(&policy.fee)
        .bind(&policy.security_deposit)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn admission_policy(&self) -> Result<Option<AdmissionPolicy>> {
        let row = sqlx::query("SELECT fee, security_deposit FROM admission_policy WHERE id = 1")
            .fetch_optional(self.pool())
            .await?;
        row.map(|row| {
            Ok(AdmissionPolicy {
                fee: row.try_get("fee")?,
                security_deposit: row.try_get("security_deposit")?,
            })
        })
        .transpose()
    }

    pub async fn set_class_policy(&self, policy: &ClassPolicy) -> Result<()> {
        sqlx::query(
            "INSERT INTO class_policies \
             (class_name, monthly_fee, annual_charges, other_charges, \
              computer_lab_charges, lab_charges) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(class_name) DO UPDATE SET \
             monthly_fee = excluded.monthly_fee, \
             annual_charges = excluded.annual_charges, \
             other_charges = excluded.other_charges, \
             computer_lab_charges = excluded.computer_lab_charges, \
             lab_charges = excluded.lab_charges",
        )
        .bind(&policy.class_name)
        .bind(&policy.monthly_fee)
        .bind(&policy.annual_charges)
        .bind(&policy.other_charges)
        .bind(&policy.computer_lab_charges)
        .bind(&policy.lab_charges)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn class_policies(&self) -> Result<Vec<ClassPolicy>> {
        let rows = sqlx::query(
            "SELECT class_name, monthly_fee, annual_charges, other_charges, \
             computer_lab_charges, lab_charges FROM class_policies ORDER BY class_name",
        )
        .fetch_all(self.pool())
        .await?;
        rows.iter()
            .map(|row| {
                Ok(ClassPolicy {
                    class_name: row.try_get("class_name")?,
                    monthly_fee: row.try_get("monthly_fee")?,
                    annual_charges: row.try_get("annual_charges")?,
                    other_charges: row.try_get("other_charges")?,
                    computer_lab_charges: row.try_get("computer_lab_charges")?,
                    lab_charges: row.try_get("lab_charges")?,
                })
            })
            .collect()
    }
}
