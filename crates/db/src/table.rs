use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Name,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Title,
    Ingredients,
    Steps,
    Tags,
    Calories,
    Protein,
    Fat,
    Carbs,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    UserId,
    Day,
    MealType,
    RecipeId,
    CreatedAt,
    UpdatedAt,
}
