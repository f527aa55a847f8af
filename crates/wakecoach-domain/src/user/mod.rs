mod aggregate;
mod repository;
mod value_objects;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::User;
pub use repository::UserRepository;
pub use value_objects::Email;
