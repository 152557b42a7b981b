use std::sync::Arc;

use uuid::Uuid;

use logger::TracingLogger;
use media::FileSystemImageStorage;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::relation::follow::FollowRepositoryPostgres;
use persistence::relation::recipe_relation::RecipeRelationRepositoryPostgres;
use persistence::tag::repository::TagRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::ingredient::get_all::GetIngredientsUseCaseImpl;
use business::application::ingredient::get_by_id::GetIngredientByIdUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::details::RecipeDetailsAssembler;
use business::application::recipe::get_all::GetRecipesUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::update::UpdateRecipeUseCaseImpl;
use business::application::relation::add::AddRelationUseCaseImpl;
use business::application::relation::remove::RemoveRelationUseCaseImpl;
use business::application::shopping_list::aggregate::GetShoppingListUseCaseImpl;
use business::application::tag::get_all::GetTagsUseCaseImpl;
use business::application::tag::get_by_id::GetTagByIdUseCaseImpl;
use business::application::user::get_all::GetUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserUseCaseImpl;
use business::application::user::subscriptions::{
    GetSubscriptionUseCaseImpl, GetSubscriptionsUseCaseImpl,
};
use business::application::user::upsert::UpsertProfileUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::relation::model::RelationTarget;
use business::domain::relation::repository::RelationRepository;
use business::domain::shared::value_objects::UserId;

use crate::api::favorite::routes::FavoriteApi;
use crate::api::health::routes::HealthApi;
use crate::api::ingredient::routes::IngredientApi;
use crate::api::links::Links;
use crate::api::recipe::routes::RecipeApi;
use crate::api::shopping_cart::routes::ShoppingCartApi;
use crate::api::subscription::routes::SubscriptionApi;
use crate::api::tag::routes::TagApi;
use crate::api::user::routes::UserApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub tag_api: TagApi,
    pub ingredient_api: IngredientApi,
    pub recipe_api: RecipeApi,
    pub favorite_api: FavoriteApi,
    pub shopping_cart_api: ShoppingCartApi,
    pub user_api: UserApi,
    pub subscription_api: SubscriptionApi,
}

fn relation_use_cases<T: RelationTarget>(
    repository: Arc<dyn RelationRepository<T>>,
    logger: Arc<dyn Logger>,
) -> (
    Arc<AddRelationUseCaseImpl<T>>,
    Arc<RemoveRelationUseCaseImpl<T>>,
) {
    (
        Arc::new(AddRelationUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        }),
        Arc::new(RemoveRelationUseCaseImpl { repository, logger }),
    )
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let links = Links::new(&config.server.public_url)?;

        // Infrastructure adapters
        let tag_repository = Arc::new(TagRepositoryPostgres::new(pool.clone()));
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let favorites: Arc<dyn RelationRepository<Uuid>> =
            Arc::new(RecipeRelationRepositoryPostgres::favorites(pool.clone()));
        let cart: Arc<dyn RelationRepository<Uuid>> =
            Arc::new(RecipeRelationRepositoryPostgres::shopping_cart(pool.clone()));
        let follows: Arc<dyn RelationRepository<UserId>> =
            Arc::new(FollowRepositoryPostgres::new(pool));
        let image_storage = Arc::new(FileSystemImageStorage::new(config.media.root.clone()));

        let details = Arc::new(RecipeDetailsAssembler {
            users: user_repository.clone(),
            favorites: favorites.clone(),
            cart: cart.clone(),
            follows: follows.clone(),
        });

        // Catalogs
        let tag_api = TagApi::new(
            Arc::new(GetTagsUseCaseImpl {
                repository: tag_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetTagByIdUseCaseImpl {
                repository: tag_repository.clone(),
                logger: logger.clone(),
            }),
        );
        let ingredient_api = IngredientApi::new(
            Arc::new(GetIngredientsUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientByIdUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Recipes
        let get_recipe_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            repository: recipe_repository.clone(),
            details: details.clone(),
            logger: logger.clone(),
        });
        let recipe_api = RecipeApi::new(
            Arc::new(CreateRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                ingredients: ingredient_repository.clone(),
                tags: tag_repository.clone(),
                storage: image_storage.clone(),
                details: details.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecipesUseCaseImpl {
                repository: recipe_repository.clone(),
                details: details.clone(),
                logger: logger.clone(),
            }),
            get_recipe_use_case.clone(),
            Arc::new(UpdateRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                ingredients: ingredient_repository,
                tags: tag_repository,
                storage: image_storage,
                details,
                logger: logger.clone(),
            }),
            Arc::new(DeleteRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                cart: cart.clone(),
                logger: logger.clone(),
            }),
            links.clone(),
        );

        // Relations
        let (add_favorite, remove_favorite) = relation_use_cases(favorites, logger.clone());
        let favorite_api = FavoriteApi::new(
            add_favorite,
            remove_favorite,
            get_recipe_use_case.clone(),
            links.clone(),
        );

        let (add_to_cart, remove_from_cart) = relation_use_cases(cart.clone(), logger.clone());
        let shopping_cart_api = ShoppingCartApi::new(
            add_to_cart,
            remove_from_cart,
            get_recipe_use_case,
            Arc::new(GetShoppingListUseCaseImpl {
                cart,
                recipes: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            links.clone(),
        );

        // Users
        let user_api = UserApi::new(
            Arc::new(GetUsersUseCaseImpl {
                repository: user_repository.clone(),
                follows: follows.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetUserUseCaseImpl {
                repository: user_repository.clone(),
                follows: follows.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpsertProfileUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            links.clone(),
        );

        let subscription = Arc::new(GetSubscriptionUseCaseImpl {
            users: user_repository,
            recipes: recipe_repository,
            logger: logger.clone(),
        });
        let (follow, unfollow) = relation_use_cases(follows.clone(), logger.clone());
        let subscription_api = SubscriptionApi::new(
            follow,
            unfollow,
            Arc::new(GetSubscriptionsUseCaseImpl {
                follows,
                subscription: subscription.clone(),
                logger,
            }),
            subscription,
            links,
        );

        Ok(Self {
            health_api: HealthApi,
            tag_api,
            ingredient_api,
            recipe_api,
            favorite_api,
            shopping_cart_api,
            user_api,
            subscription_api,
        })
    }
}
