//! Subcommand arguments and handlers.
//!
//! Handlers take any `ClientRepository` and return the text to print.

use clap::Args;
use clients_core::{Client, ClientId, ClientRepository, RepoError};
use std::error::Error;

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Client id
    #[arg(allow_negative_numbers = true)]
    pub id: ClientId,
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Full name
    #[arg(long)]
    pub fio: String,
    #[arg(long)]
    pub login: String,
    /// Birthday as YYYYMMDD
    #[arg(long)]
    pub birthday: String,
    #[arg(long)]
    pub email: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Client id
    #[arg(allow_negative_numbers = true)]
    pub id: ClientId,
    #[command(flatten)]
    pub fields: FieldArgs,
}

impl From<FieldArgs> for Client {
    fn from(args: FieldArgs) -> Self {
        Client::new(args.fio, args.login, args.birthday, args.email)
    }
}

pub fn get<R: ClientRepository>(
    repo: &R,
    args: IdArgs,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let client = repo.get_client(args.id)?;
    if json {
        Ok(serde_json::to_string(&client)?)
    } else {
        Ok(client.to_string())
    }
}

pub fn create<R: ClientRepository>(repo: &R, args: FieldArgs) -> Result<String, Box<dyn Error>> {
    let id = repo.create_client(&Client::from(args))?;
    Ok(id.to_string())
}

pub fn update<R: ClientRepository>(repo: &R, args: UpdateArgs) -> Result<String, Box<dyn Error>> {
    repo.update_client(args.id, &Client::from(args.fields))?;
    Ok(String::new())
}

pub fn delete<R: ClientRepository>(repo: &R, args: IdArgs) -> Result<String, Box<dyn Error>> {
    repo.delete_client(args.id)?;
    Ok(String::new())
}

pub fn is_not_found(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<RepoError>()
        .is_some_and(RepoError::is_not_found)
}

/// Stable log code for a handler failure.
pub fn error_code(err: &(dyn Error + 'static)) -> &'static str {
    match err.downcast_ref::<RepoError>() {
        Some(RepoError::Connection(_)) => "connection_failed",
        Some(RepoError::NotFound(_)) => "not_found",
        Some(RepoError::Query { .. }) => "query_failed",
        Some(RepoError::Scan { .. }) => "scan_failed",
        Some(RepoError::Exec { .. }) => "exec_failed",
        Some(RepoError::IdRetrieval { .. }) => "id_retrieval_failed",
        None => "output_failed",
    }
}
