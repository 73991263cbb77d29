use common::requests::LoginRequest;
use common::session::LoginFlow;

pub struct LoginComponent {
    pub generated_code: String,
    pub phone_number: String,
    pub flow: LoginFlow,
}

impl LoginComponent {
    pub fn new() -> Self {
        Self {
            generated_code: String::new(),
            phone_number: String::new(),
            flow: LoginFlow::default(),
        }
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            generated_code: self.generated_code.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}
