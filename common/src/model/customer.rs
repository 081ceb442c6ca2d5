use serde::{Deserialize, Serialize};

/// Customer record. `total_spent`, `total_purchases` and
/// `last_purchase_date` are aggregates computed server-side; the client only
/// displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub total_purchases: u32,
    pub last_purchase_date: Option<String>,
    pub is_active: bool,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match over full name, email and company.
    /// An empty or whitespace-only query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.full_name().to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self
                .company
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: &str, last: &str, email: &str, company: Option<&str>) -> Customer {
        Customer {
            id: "c-1".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: None,
            company: company.map(str::to_string),
            total_spent: 0.0,
            total_purchases: 0,
            last_purchase_date: None,
            is_active: true,
        }
    }

    #[test]
    fn filter_matches_name_email_and_company() {
        let c = customer("Mere", "Henare", "mere@kapiti-auto.co.nz", Some("Kapiti Auto"));
        assert!(c.matches_query("mere hen"));
        assert!(c.matches_query("KAPITI-AUTO"));
        assert!(c.matches_query("kapiti auto"));
        assert!(!c.matches_query("taylor"));
    }

    #[test]
    fn filter_without_company_only_checks_name_and_email() {
        let c = customer("Sam", "Taylor", "sam@example.com", None);
        assert!(c.matches_query("taylor"));
        assert!(c.matches_query("example.com"));
        assert!(!c.matches_query("kapiti"));
    }

    #[test]
    fn empty_query_matches_everyone() {
        let c = customer("Sam", "Taylor", "sam@example.com", None);
        assert!(c.matches_query(""));
        assert!(c.matches_query("   "));
    }
}
