#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod password_reset_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod order_tests;

#[cfg(test)]
mod error_mapping_tests;

#[cfg(test)]
mod notification_tests;
