mod postgres;
mod replay;

pub use self::postgres::PostgresDriver;
pub use self::replay::{ReplayDriver, Statement};
