use common::model::customer::Customer;
use common::requests::CustomerPayload;

pub enum Dialog {
    None,
    Edit(CustomerForm),
    ConfirmDelete(Customer),
    History(Customer),
}

pub struct CustomerForm {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub is_active: bool,
    pub busy: bool,
    pub error: Option<String>,
}

impl CustomerForm {
    pub fn empty() -> Self {
        CustomerForm {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            is_active: true,
            busy: false,
            error: None,
        }
    }

    pub fn from_customer(customer: &Customer) -> Self {
        CustomerForm {
            id: Some(customer.id.clone()),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            company: customer.company.clone().unwrap_or_default(),
            is_active: customer.is_active,
            busy: false,
            error: None,
        }
    }

    pub fn validate(&self) -> Result<CustomerPayload, String> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err("First and last name are required.".to_string());
        }
        if !email.contains('@') {
            return Err("A valid email address is required.".to_string());
        }
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Ok(CustomerPayload {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: optional(&self.phone),
            company: optional(&self.company),
            is_active: self.is_active,
        })
    }
}

pub struct CustomersSection {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub active_only: bool,
    pub epoch: u32,
    pub dialog: Dialog,
}

impl CustomersSection {
    pub fn new() -> Self {
        CustomersSection {
            customers: Vec::new(),
            loading: false,
            error: None,
            query: String::new(),
            active_only: false,
            epoch: 0,
            dialog: Dialog::None,
        }
    }

    pub fn visible(&self) -> Vec<&Customer> {
        let mut rows: Vec<&Customer> = self
            .customers
            .iter()
            .filter(|c| c.matches_query(&self.query))
            .filter(|c| !self.active_only || c.is_active)
            .collect();
        rows.sort_by(|a, b| {
            a.last_name
                .to_lowercase()
                .cmp(&b.last_name.to_lowercase())
                .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
        });
        rows
    }

    pub fn patch(&mut self, customer: Customer) {
        match self.customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer,
            None => self.customers.push(customer),
        }
    }
}
