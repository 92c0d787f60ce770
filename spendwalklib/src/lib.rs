//! spendwalklib — проход по списаниям с остатком: списываем суммы по порядку,
//! пока хватает денег. Плюс чтение плана (CSV, JSON) и запись отчёта (текст, CSV, JSON).

pub mod error;
pub mod model;
pub mod traits;
pub mod walk;

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod text;
}

pub use walk::{run, Walk};
