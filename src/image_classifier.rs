#[cfg(test)]
pub mod impl_fake;
pub mod impl_model;
pub mod interface;
pub mod model;
pub mod models;
pub mod softmax;
pub mod tract;
