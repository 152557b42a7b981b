use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::recipe::model::{Recipe, RecipeDetails};
use crate::domain::relation::repository::RelationRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;

/// Decorates recipes with their author and the viewer's flags.
///
/// Anonymous viewers get every flag set to `false` without touching the
/// relation stores.
pub struct RecipeDetailsAssembler {
    pub users: Arc<dyn UserRepository>,
    pub favorites: Arc<dyn RelationRepository<Uuid>>,
    pub cart: Arc<dyn RelationRepository<Uuid>>,
    pub follows: Arc<dyn RelationRepository<UserId>>,
}

#[derive(Default)]
struct ViewerRelations {
    favorites: HashSet<Uuid>,
    cart: HashSet<Uuid>,
    follows: HashSet<UserId>,
}

impl RecipeDetailsAssembler {
    pub async fn assemble(
        &self,
        recipes: Vec<Recipe>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<RecipeDetails>, RepositoryError> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let relations = match viewer {
            Some(viewer) => ViewerRelations {
                favorites: self.favorites.list_targets(viewer).await?.into_iter().collect(),
                cart: self.cart.list_targets(viewer).await?.into_iter().collect(),
                follows: self.follows.list_targets(viewer).await?.into_iter().collect(),
            },
            None => ViewerRelations::default(),
        };

        let mut authors = HashMap::new();
        let mut details = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            if !authors.contains_key(&recipe.author_id) {
                let author = self.users.get_by_id(&recipe.author_id).await?;
                authors.insert(recipe.author_id.clone(), author);
            }
            let author = authors
                .get(&recipe.author_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)?;

            details.push(RecipeDetails {
                is_favorited: relations.favorites.contains(&recipe.id),
                is_in_shopping_cart: relations.cart.contains(&recipe.id),
                author: UserProfile {
                    is_subscribed: relations.follows.contains(&author.id),
                    user: author,
                },
                recipe,
            });
        }
        Ok(details)
    }

    pub async fn assemble_one(
        &self,
        recipe: Recipe,
        viewer: Option<&UserId>,
    ) -> Result<RecipeDetails, RepositoryError> {
        self.assemble(vec![recipe], viewer)
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::relation::model::RelationKind;
    use crate::test_support::{
        MockFollowRepo, MockRecipeRelationRepo, MockUserRepo, empty_follows,
        empty_recipe_relations, recipe, user,
    };

    /// Assembler whose stores know the given authors and hold no relations.
    pub(crate) fn assembler_for(authors: &[&str]) -> RecipeDetailsAssembler {
        let known: Vec<String> = authors.iter().map(|a| a.to_string()).collect();
        let mut users = MockUserRepo::new();
        users.expect_get_by_id().returning(move |id| {
            if known.iter().any(|k| k == id.as_str()) {
                Ok(user(id.as_str()))
            } else {
                Err(RepositoryError::NotFound)
            }
        });
        RecipeDetailsAssembler {
            users: Arc::new(users),
            favorites: Arc::new(empty_recipe_relations(RelationKind::Favorite)),
            cart: Arc::new(empty_recipe_relations(RelationKind::ShoppingCart)),
            follows: Arc::new(empty_follows()),
        }
    }

    #[tokio::test]
    async fn should_leave_flags_unset_for_anonymous_viewer() {
        let mut favorites = MockRecipeRelationRepo::new();
        favorites.expect_list_targets().never();
        let mut follows = MockFollowRepo::new();
        follows.expect_list_targets().never();

        let mut users = MockUserRepo::new();
        users.expect_get_by_id().returning(|id| Ok(user(id.as_str())));

        let assembler = RecipeDetailsAssembler {
            users: Arc::new(users),
            favorites: Arc::new(favorites),
            cart: Arc::new(MockRecipeRelationRepo::new()),
            follows: Arc::new(follows),
        };

        let details = assembler
            .assemble(vec![recipe("chef", "Soup")], None)
            .await
            .unwrap();

        assert_eq!(details.len(), 1);
        assert!(!details[0].is_favorited);
        assert!(!details[0].is_in_shopping_cart);
        assert!(!details[0].author.is_subscribed);
    }

    #[tokio::test]
    async fn should_resolve_viewer_flags() {
        let soup = recipe("chef", "Soup");
        let salad = recipe("chef", "Salad");
        let soup_id = soup.id;
        let salad_id = salad.id;

        let mut favorites = MockRecipeRelationRepo::new();
        favorites
            .expect_list_targets()
            .returning(move |_| Ok(vec![soup_id]));
        let mut cart = MockRecipeRelationRepo::new();
        cart.expect_list_targets()
            .returning(move |_| Ok(vec![salad_id]));
        let mut follows = MockFollowRepo::new();
        follows
            .expect_list_targets()
            .returning(|_| Ok(vec![UserId::new("chef")]));

        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .times(1)
            .returning(|id| Ok(user(id.as_str())));

        let assembler = RecipeDetailsAssembler {
            users: Arc::new(users),
            favorites: Arc::new(favorites),
            cart: Arc::new(cart),
            follows: Arc::new(follows),
        };

        let viewer = UserId::new("viewer");
        let details = assembler
            .assemble(vec![soup, salad], Some(&viewer))
            .await
            .unwrap();

        assert!(details[0].is_favorited);
        assert!(!details[0].is_in_shopping_cart);
        assert!(!details[1].is_favorited);
        assert!(details[1].is_in_shopping_cart);
        assert!(details.iter().all(|d| d.author.is_subscribed));
    }

    #[tokio::test]
    async fn should_fail_when_author_profile_is_gone() {
        let assembler = assembler_for(&[]);

        let result = assembler
            .assemble_one(recipe("ghost", "Soup"), None)
            .await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}
