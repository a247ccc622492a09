//! HTTP-level integration tests for the Dongle Tracker API.

mod helpers;

mod auth_test;
mod dongle_test;
mod status_test;
mod storage_test;
