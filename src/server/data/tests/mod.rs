mod accounting_connection;
mod dancer;
mod fee_type;
