//! Parcel tracking use-case service.
//!
//! # Responsibility
//! - Register parcels, advance them through the known lifecycle and expose
//!   address change, deletion and client listing to callers.
//! - Record one structured log event per operation.
//!
//! # Invariants
//! - The service never bypasses repository gates.
//! - `next_status` only moves forward: `registered -> sent -> delivered`.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoError, RepoResult};
use log::{debug, info, warn};

/// Use-case service wrapper for parcel tracking.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` and returns the stored record.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.repo.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    pub fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get(number)
    }

    /// Lists every parcel of `client`.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let parcels = self.repo.get_by_client(client)?;
        debug!(
            "event=parcel_list module=service status=ok client={} count={}",
            client,
            parcels.len()
        );
        Ok(parcels)
    }

    /// Moves a parcel to the next known status and returns the resulting status.
    ///
    /// `delivered` parcels, and parcels with a status outside the known set,
    /// are left unchanged.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<String> {
        let parcel = self.repo.get(number)?;
        let next = match parcel.known_status().and_then(ParcelStatus::next) {
            Some(next) => next,
            None => {
                debug!(
                    "event=parcel_next_status module=service status=skipped number={} current={}",
                    number, parcel.status
                );
                return Ok(parcel.status);
            }
        };

        self.repo.set_status(number, next.as_str())?;
        info!(
            "event=parcel_next_status module=service status=ok number={} from={} to={}",
            number, parcel.status, next
        );
        Ok(next.as_str().to_string())
    }

    /// Changes the delivery address of a `registered` parcel.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        match self.repo.set_address(number, address) {
            Ok(()) => {
                info!("event=parcel_change_address module=service status=ok number={number}");
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=parcel_change_address module=service status=error number={} error_code={} error={}",
                    number,
                    error_code(&err),
                    err
                );
                Err(err)
            }
        }
    }

    /// Deletes a `registered` parcel. Parcels in other statuses are kept and
    /// the call still succeeds.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.delete(number)?;
        match self.repo.get(number) {
            Ok(parcel) => info!(
                "event=parcel_delete module=service status=skipped number={} current={}",
                number, parcel.status
            ),
            Err(RepoError::NotFound(_)) => {
                info!("event=parcel_delete module=service status=ok number={number}")
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }
}

/// Formats a parcel as a single human-readable line.
pub fn describe(parcel: &Parcel) -> String {
    format!(
        "parcel #{}: client={} address=\"{}\" status={} created_at={}",
        parcel.number, parcel.client, parcel.address, parcel.status, parcel.created_at
    )
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::NotFound(_) => "not_found",
        RepoError::PreconditionFailed { .. } => "precondition_failed",
        RepoError::Validation(_) => "validation_failed",
        RepoError::Db(_)
        | RepoError::MissingRequiredTable(_)
        | RepoError::MissingRequiredColumn { .. } => "storage_failed",
    }
}
