use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Tags,
    Ingredients,
    Recipes,
    Favorites,
    ShoppingCart,
    Users,
    Subscriptions,
}
