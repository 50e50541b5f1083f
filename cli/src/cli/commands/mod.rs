pub mod call;
pub mod generate;
pub mod methods;
pub mod status;
