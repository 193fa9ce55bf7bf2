use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::identity;

/// Role slots filled for every store; Pharmacist appears twice to model the
/// double headcount
pub const ROSTER_ROLES: [Role; 5] = [
    Role::Manager,
    Role::Pharmacist,
    Role::Pharmacist,
    Role::Cashier,
    Role::Janitor,
];

pub const STORE_LOCATIONS: &[(&str, &str)] = &[
    ("Lagos", "Lagos"),
    ("Ibadan", "Oyo"),
    ("Enugu", "Enugu"),
    ("Kano", "Kano"),
    ("Port Harcourt", "Rivers"),
    ("Abuja", "FCT"),
    ("Kaduna", "Kaduna"),
    ("Benin City", "Edo"),
    ("Aba", "Abia"),
    ("Jos", "Plateau"),
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    Pharmacist,
    Cashier,
    Janitor,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Manager, Role::Pharmacist, Role::Cashier, Role::Janitor];

    fn salary_range(self) -> RangeInclusive<u32> {
        match self {
            Role::Manager => 300_000..=400_000,
            Role::Pharmacist => 200_000..=250_000,
            Role::Cashier => 100_000..=150_000,
            Role::Janitor => 50_000..=80_000,
        }
    }
}

/// One salary per role, drawn once per run and shared by every employee
/// holding that role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalarySchedule([u32; 4]);

impl SalarySchedule {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let mut salaries = [0; 4];
        for role in Role::ALL {
            salaries[role as usize] = rng.gen_range(role.salary_range());
        }
        SalarySchedule(salaries)
    }

    #[must_use]
    pub fn salary(&self, role: Role) -> u32 {
        self.0[role as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub role: Role,
    pub salary: u32,
}

/// A store and its ordered roster; the whole roster shares the store's
/// operating location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub name: String,
    pub city: &'static str,
    pub state: &'static str,
    pub roster: Vec<Employee>,
}

impl Store {
    fn sample<R: Rng>(name: String, salaries: &SalarySchedule, rng: &mut R) -> Self {
        let (city, state) = STORE_LOCATIONS[rng.gen_range(0..STORE_LOCATIONS.len())];
        let roster = ROSTER_ROLES
            .iter()
            .map(|&role| Employee {
                name: identity::full_name(rng),
                role,
                salary: salaries.salary(role),
            })
            .collect();
        Store {
            name,
            city,
            state,
            roster,
        }
    }
}

pub fn build_stores<R: Rng>(count: usize, salaries: &SalarySchedule, rng: &mut R) -> Vec<Store> {
    (1..=count)
        .map(|i| Store::sample(format!("Lekwot Pharmacy {i}"), salaries, rng))
        .collect()
}
