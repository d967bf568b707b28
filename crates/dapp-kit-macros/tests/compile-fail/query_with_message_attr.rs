//! Test: query method (&self) with #[message] attribute should fail

#[dapp_kit::contract]
pub trait BadContract {
    #[message]
    fn get_value(&self) -> u64;
}

fn main() {}
