use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pharma_gen::sales::{self, GenConfig, Sampler, COLUMNS, SALE_WINDOW_DAYS};
use pharma_gen::store::{build_stores, Role, SalarySchedule};
use pharma_gen::{customer, product};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn test_default_run_schema_and_cardinality() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = GenConfig::default();
    let records = sales::generate(&config, fixed_today(), &mut rng).unwrap();
    assert_eq!(records.len(), 10_000);

    let mut sink = Vec::new();
    sales::write_csv(&records, &mut sink).unwrap();
    let output = String::from_utf8(sink).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 10_001);
    assert_eq!(
        lines[0],
        "id_of_sale,product_name,drug_brand,drug_category,price,quantity_purchased,\
         quantity_in_stock,last_updated_date,sale_date,customer,customer_email,\
         customer_mobile_number,customer_city,customer_state,employee,employee_role,\
         employee_salary,store_name,store_city,store_state"
    );
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), COLUMNS.len());
    }
}

#[test]
fn test_zero_transactions_writes_header_only() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = GenConfig {
        transactions: 0,
        ..GenConfig::default()
    };
    let records = sales::generate(&config, fixed_today(), &mut rng).unwrap();

    let mut sink = Vec::new();
    sales::write_csv(&records, &mut sink).unwrap();
    let output = String::from_utf8(sink).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert_eq!(output.lines().next().unwrap(), COLUMNS.join(","));
}

#[test]
fn test_same_seed_same_bytes() {
    let today = fixed_today();
    let config = GenConfig {
        transactions: 500,
        ..GenConfig::default()
    };

    let mut first = Vec::new();
    let records = sales::generate(&config, today, &mut StdRng::seed_from_u64(42)).unwrap();
    sales::write_csv(&records, &mut first).unwrap();

    let mut second = Vec::new();
    let records = sales::generate(&config, today, &mut StdRng::seed_from_u64(42)).unwrap();
    sales::write_csv(&records, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_records_stay_consistent_with_their_store() {
    let today = fixed_today();
    let mut rng = StdRng::seed_from_u64(33);

    let products = product::build_products(50, today, &mut rng).unwrap();
    let customers = customer::build_customers(40, &mut rng);
    let salaries = SalarySchedule::sample(&mut rng);
    let stores = build_stores(15, &salaries, &mut rng);

    let rosters: HashMap<&str, &_> = stores
        .iter()
        .map(|store| (store.name.as_str(), store))
        .collect();

    let sampler = Sampler::new(&products, &customers, &stores, today).unwrap();
    let records = sampler.generate(2_000, &mut rng);

    for record in &records {
        let store = rosters[record.store_name.as_str()];
        assert_eq!(record.store_city, store.city);
        assert_eq!(record.store_state, store.state);
        assert!(store.roster.iter().any(|employee| {
            employee.name == record.employee
                && employee.role == record.employee_role
                && employee.salary == record.employee_salary
        }));
    }
}

#[test]
fn test_salaries_and_date_windows_over_a_run() {
    let today = fixed_today();
    let mut rng = StdRng::seed_from_u64(77);
    let records = sales::generate(&GenConfig::default(), today, &mut rng).unwrap();

    let mut salary_by_role: HashMap<Role, u32> = HashMap::new();
    let earliest_sale = today - Duration::days(SALE_WINDOW_DAYS);
    let earliest_update = today - Duration::days(30);

    for record in &records {
        let salary = salary_by_role
            .entry(record.employee_role)
            .or_insert(record.employee_salary);
        assert_eq!(*salary, record.employee_salary);

        assert!(record.sale_date >= earliest_sale && record.sale_date <= today);
        assert!(record.last_updated_date >= earliest_update && record.last_updated_date <= today);
        assert!((1..=10).contains(&record.quantity_purchased));
    }

    // ids form the contiguous 1-based range, in generation order
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.id_of_sale as usize, i + 1);
    }
}
