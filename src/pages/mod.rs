//! Page components for the payment form.

mod payment;

pub use payment::Payment;
