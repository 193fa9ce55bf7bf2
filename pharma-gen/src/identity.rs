//! Synthetic identities for generated people, driven through the run's
//! random source so seeded runs stay reproducible.

use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::CellNumber;
use fake::Fake;
use rand::Rng;

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

pub fn email<R: Rng>(rng: &mut R) -> String {
    FreeEmail().fake_with_rng(rng)
}

pub fn phone<R: Rng>(rng: &mut R) -> String {
    CellNumber().fake_with_rng(rng)
}
