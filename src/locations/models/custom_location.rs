#[derive(Debug, Clone)]
pub struct CustomLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub address: String,
}
