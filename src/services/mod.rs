pub mod chat_feed;
pub mod library_filter;
pub mod notification_service;
pub mod session;

#[cfg(test)]
mod library_filter_test;
