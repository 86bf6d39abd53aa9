use sufra_shared::State;

mod login;
mod register;

pub use login::LoginInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: State,
}

impl Command {
    pub fn new(state: State) -> Self {
        Self { state }
    }
}
