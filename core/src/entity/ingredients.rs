use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    /// JSON object of per-100g nutrient values.
    pub nutrition_per_100g: Option<Json>,
    pub storage_method: Option<String>,
    pub shelf_life_days: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_ingredients::Entity")]
    RecipeIngredients,
    #[sea_orm(has_many = "super::ingredient_stocks::Entity")]
    IngredientStocks,
}

impl Related<super::recipe_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredients.def()
    }
}

impl Related<super::ingredient_stocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IngredientStocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
