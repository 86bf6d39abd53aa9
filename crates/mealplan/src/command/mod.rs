use sufra_shared::State;

mod assign;
mod delete;

pub use assign::AssignInput;

#[derive(Clone)]
pub struct Command {
    state: State,
    recipes: sufra_recipe::Query,
}

impl Command {
    pub fn new(state: State) -> Self {
        Self {
            recipes: sufra_recipe::Query::new(state.clone()),
            state,
        }
    }
}
