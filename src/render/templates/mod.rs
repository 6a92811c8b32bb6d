pub mod compact;
pub mod default;
pub mod modern;
