pub mod login;
pub mod signup;

pub use login::LoginCommand;
pub use signup::{DoctorInfo, SignupCommand, SignupField, SignupPayload};
