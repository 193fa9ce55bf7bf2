use rand::Rng;

use crate::identity;

pub const CUSTOMER_LOCATIONS: &[(&str, &str)] = &[
    ("Badagry", "Lagos"),
    ("Egbeda", "Lagos"),
    ("Ikoyi", "Lagos"),
    ("Oshodi", "Lagos"),
    ("Ajegunle", "Lagos"),
    ("Ibadan", "Oyo"),
    ("Lafenwa", "Ogun"),
    ("Agodi", "Oyo"),
    ("Ile-Ife", "Osun"),
    ("Enugu", "Enugu"),
    ("Nsukka", "Enugu"),
    ("Owerri", "Imo"),
    ("Aba", "Abia"),
    ("Umuahia", "Abia"),
    ("Ohafia", "Abia"),
    ("Kano", "Kano"),
    ("Abuja", "FCT"),
    ("Kaduna", "Kaduna"),
    ("Jos", "Plateau"),
    ("Port Harcourt", "Rivers"),
    ("Benin City", "Edo"),
    ("Asaba", "Delta"),
    ("Calabar", "Cross River"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub city: &'static str,
    pub state: &'static str,
}

impl Customer {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        let name = identity::full_name(rng);
        let email = identity::email(rng);
        let mobile = identity::phone(rng);
        let (city, state) = CUSTOMER_LOCATIONS[rng.gen_range(0..CUSTOMER_LOCATIONS.len())];
        Customer {
            name,
            email,
            mobile,
            city,
            state,
        }
    }
}

pub fn build_customers<R: Rng>(count: usize, rng: &mut R) -> Vec<Customer> {
    (0..count).map(|_| Customer::sample(rng)).collect()
}
