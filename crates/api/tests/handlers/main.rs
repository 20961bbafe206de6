mod test_utils;

mod admin_test;
mod appointments_test;
mod availability_test;
mod booking_test;
mod middleware_test;
