//! Command handlers for the `tfplugindocs` CLI.

pub(crate) mod generate;
pub(crate) mod schema;

pub(crate) use generate::handle_generate_command;
pub(crate) use schema::handle_schema_command;
