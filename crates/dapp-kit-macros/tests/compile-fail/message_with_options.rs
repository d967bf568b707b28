//! Test: #[message(..)] with options should fail

#[dapp_kit::contract]
pub trait BadContract {
    #[message(lazy)]
    fn do_something(&mut self);
}

fn main() {}
