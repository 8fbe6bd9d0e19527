use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{
            DailyIntake, DailyNutrition, DayBreakdown, IngredientNutrition, IngredientUsage,
            MealNutrition, NutrientRecord, PlanNutritionReport, Recommendation, RecipeNutrition,
            TargetAnalysis, TargetStatus, WeeklyAverage, WeeklyNutrition, round1,
        },
        ports::NutritionRepository,
    },
};

/// Nutrient contribution of a single recipe-ingredient row.
///
/// Quantities are taken as gram-equivalent against the ingredient's per-100g
/// basis: `ratio = quantity / 100`, no unit conversion table exists. An absent
/// nutrient record contributes zero.
pub fn ingredient_contribution(usage: &IngredientUsage) -> NutrientRecord {
    let per_100g = usage.per_100g.clone().unwrap_or_default();
    per_100g.scale(usage.quantity / 100.0)
}

/// Total nutrition of a recipe rescaled to `requested_servings`, rounded to
/// 1 decimal. When `recipe_servings <= 0` the rescale is skipped rather than
/// dividing by zero.
pub fn calculate_recipe_nutrition(
    usages: &[IngredientUsage],
    recipe_servings: i32,
    requested_servings: f64,
) -> NutrientRecord {
    let mut totals = NutrientRecord::default();
    for usage in usages {
        totals.add(&ingredient_contribution(usage));
    }

    if recipe_servings > 0 {
        totals = totals.scale(requested_servings / recipe_servings as f64);
    }

    totals.rounded()
}

/// Full breakdown for the recipe nutrition endpoint: unscaled totals, the
/// per-serving division, and per-ingredient shares.
pub fn recipe_nutrition_breakdown(
    usages: &[IngredientUsage],
    recipe_servings: i32,
) -> RecipeNutrition {
    let mut totals = NutrientRecord::default();
    let mut ingredients = Vec::with_capacity(usages.len());

    for usage in usages {
        let contribution = ingredient_contribution(usage);
        totals.add(&contribution);
        ingredients.push(IngredientNutrition {
            ingredient_id: usage.ingredient_id,
            ingredient_name: usage.ingredient_name.clone(),
            quantity: usage.quantity,
            unit: usage.unit.clone(),
            nutrition: contribution.rounded(),
        });
    }

    let per_serving = if recipe_servings > 0 {
        totals.scale(1.0 / recipe_servings as f64).rounded()
    } else {
        NutrientRecord::default()
    };

    RecipeNutrition {
        total: totals.rounded(),
        per_serving,
        ingredients,
    }
}

/// Sums the completed meals of one day. Daily (and weekly) intake counts only
/// completed items; planned-but-skipped meals are not intake.
pub async fn daily_nutrition<R: NutritionRepository>(
    repo: &R,
    user_id: Uuid,
    date: NaiveDate,
) -> Result<DailyNutrition, CoreError> {
    let planned = repo.completed_meals_for_date(user_id, date).await?;

    let mut totals = NutrientRecord::default();
    let mut meals = Vec::with_capacity(planned.len());

    for meal in planned {
        let usages = repo.recipe_usages(meal.recipe_id).await?;
        let nutrition = calculate_recipe_nutrition(&usages, meal.recipe_servings, meal.servings);
        totals.add(&nutrition);
        meals.push(MealNutrition {
            meal_type: meal.meal_type,
            recipe_id: meal.recipe_id,
            recipe_title: meal.recipe_title,
            servings: meal.servings,
            nutrition,
        });
    }

    Ok(DailyNutrition {
        date,
        totals: totals.rounded(),
        meals,
    })
}

/// Runs the daily aggregation for the 7 dates `today-6 ..= today` and
/// averages the {calories, protein, carbs, fat} subset.
pub async fn weekly_nutrition<R: NutritionRepository>(
    repo: &R,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<WeeklyNutrition, CoreError> {
    let start_date = today - Duration::days(6);

    let mut daily_data = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = start_date + Duration::days(offset);
        let day = daily_nutrition(repo, user_id, date).await?;
        daily_data.push(DailyIntake {
            date,
            calories: day.totals.calories,
            protein: day.totals.protein,
            carbs: day.totals.carbs,
            fat: day.totals.fat,
        });
    }

    let average = weekly_average(&daily_data);

    Ok(WeeklyNutrition {
        start_date,
        end_date: today,
        daily_data,
        average,
    })
}

/// Arithmetic mean of each metric; an empty series averages to 0.
pub fn weekly_average(days: &[DailyIntake]) -> WeeklyAverage {
    if days.is_empty() {
        return WeeklyAverage::default();
    }

    let n = days.len() as f64;
    WeeklyAverage {
        avg_calories: round1(days.iter().map(|d| d.calories).sum::<f64>() / n),
        avg_protein: round1(days.iter().map(|d| d.protein).sum::<f64>() / n),
        avg_carbs: round1(days.iter().map(|d| d.carbs).sum::<f64>() / n),
        avg_fat: round1(days.iter().map(|d| d.fat).sum::<f64>() / n),
    }
}

pub fn classify(rate: f64) -> TargetStatus {
    if rate >= 95.0 {
        TargetStatus::Achieved
    } else if rate < 90.0 {
        TargetStatus::Under
    } else {
        TargetStatus::Close
    }
}

/// Compares actual totals against a nutrient-name → target map. A target of
/// zero or less yields a rate of 0 instead of dividing by zero; unknown keys
/// are skipped.
pub fn analyze_targets(
    targets: &BTreeMap<String, f64>,
    actual: &NutrientRecord,
) -> BTreeMap<String, TargetAnalysis> {
    let mut analysis = BTreeMap::new();

    for (key, target) in targets {
        let Some(actual_value) = actual.get(key) else {
            continue;
        };
        let rate = if *target > 0.0 {
            actual_value / target * 100.0
        } else {
            0.0
        };
        analysis.insert(
            key.clone(),
            TargetAnalysis {
                target: *target,
                actual: actual_value,
                achievement_rate: round1(rate),
                status: classify(rate),
            },
        );
    }

    analysis
}

/// Fixed recommendation table keyed by nutrient and shortfall/overshoot.
/// Sodium and sugar are less-is-better nutrients: their reduction advice
/// triggers on a rate above 110 regardless of the three-way status.
pub fn generate_recommendations(
    analysis: &BTreeMap<String, TargetAnalysis>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for (nutrient, entry) in analysis {
        if entry.status == TargetStatus::Under {
            match nutrient.as_str() {
                "protein" => recommendations.push(Recommendation {
                    kind: "protein".to_string(),
                    message: "Protein intake is low; add more meat, eggs, or legumes".to_string(),
                    priority: "high".to_string(),
                }),
                "calories" => recommendations.push(Recommendation {
                    kind: "calories".to_string(),
                    message: "Calorie intake is low; add staples or healthy fats".to_string(),
                    priority: "medium".to_string(),
                }),
                "fiber" => recommendations.push(Recommendation {
                    kind: "fiber".to_string(),
                    message: "Fiber intake is low; add vegetables, fruit, and whole grains"
                        .to_string(),
                    priority: "medium".to_string(),
                }),
                _ => {}
            }
        }

        if entry.achievement_rate > 110.0 {
            match nutrient.as_str() {
                "sodium" => recommendations.push(Recommendation {
                    kind: "sodium".to_string(),
                    message: "Sodium intake is high; use less salt and prefer low-sodium foods"
                        .to_string(),
                    priority: "high".to_string(),
                }),
                "sugar" => recommendations.push(Recommendation {
                    kind: "sugar".to_string(),
                    message: "Sugar intake is high; cut back on sweets and sugary drinks"
                        .to_string(),
                    priority: "medium".to_string(),
                }),
                _ => {}
            }
        }
    }

    recommendations
}

/// Aggregates an entire plan and compares the result against its targets.
/// Every item counts here, completed or not; a plan is analysed as planned.
pub async fn analyze_plan<R: NutritionRepository>(
    repo: &R,
    meal_plan_id: Uuid,
    targets: &BTreeMap<String, f64>,
) -> Result<PlanNutritionReport, CoreError> {
    let items = repo.meals_for_plan(meal_plan_id).await?;

    let mut totals = NutrientRecord::default();
    let mut daily_breakdown: BTreeMap<NaiveDate, DayBreakdown> = BTreeMap::new();

    for item in items {
        let usages = repo.recipe_usages(item.recipe_id).await?;
        let nutrition = calculate_recipe_nutrition(&usages, item.recipe_servings, item.servings);

        totals.add(&nutrition);

        let day = daily_breakdown.entry(item.planned_date).or_default();
        day.totals.add(&nutrition);
        day.meals.push(MealNutrition {
            meal_type: item.meal_type,
            recipe_id: item.recipe_id,
            recipe_title: item.recipe_title,
            servings: item.servings,
            nutrition,
        });
    }

    let totals = totals.rounded();
    for day in daily_breakdown.values_mut() {
        day.totals = day.totals.rounded();
    }

    let target_analysis = analyze_targets(targets, &totals);
    let recommendations = generate_recommendations(&target_analysis);

    Ok(PlanNutritionReport {
        totals,
        daily_breakdown,
        target_analysis,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{
        meal_plan::entities::MealType, nutrition::entities::PlannedMeal,
    };

    fn egg_per_100g() -> NutrientRecord {
        NutrientRecord {
            calories: 155.0,
            protein: 13.0,
            carbs: 1.1,
            fat: 11.0,
            ..Default::default()
        }
    }

    fn usage(quantity: f64, per_100g: Option<NutrientRecord>) -> IngredientUsage {
        IngredientUsage {
            ingredient_id: Uuid::new_v4(),
            ingredient_name: "egg".to_string(),
            quantity,
            unit: "g".to_string(),
            per_100g,
        }
    }

    #[test]
    fn egg_scenario_matches_reference_values() {
        // 150 g of egg across 3 servings; requesting 3 servings means no
        // rescale is applied.
        let usages = vec![usage(150.0, Some(egg_per_100g()))];
        let totals = calculate_recipe_nutrition(&usages, 3, 3.0);

        assert_eq!(totals.calories, 232.5);
        assert_eq!(totals.protein, 19.5);
        assert_eq!(totals.carbs, 1.7);
        assert_eq!(totals.fat, 16.5);
    }

    #[test]
    fn missing_nutrient_record_counts_as_zero() {
        let usages = vec![usage(500.0, None), usage(120.0, None)];
        let totals = calculate_recipe_nutrition(&usages, 2, 2.0);
        assert_eq!(totals, NutrientRecord::default());
    }

    #[test]
    fn zero_servings_skips_rescale() {
        let usages = vec![usage(100.0, Some(egg_per_100g()))];
        let totals = calculate_recipe_nutrition(&usages, 0, 4.0);
        assert_eq!(totals.calories, 155.0);
    }

    #[test]
    fn fractional_servings_scale_without_truncation() {
        // Half a portion of a single-serving recipe halves every nutrient.
        let usages = vec![usage(150.0, Some(egg_per_100g()))];
        let half = calculate_recipe_nutrition(&usages, 1, 0.5);

        assert_eq!(half.calories, 116.3);
        assert_eq!(half.protein, 9.8);
    }

    #[test]
    fn scaling_is_linear_within_rounding() {
        let usages = vec![usage(150.0, Some(egg_per_100g()))];
        let one = calculate_recipe_nutrition(&usages, 3, 1.0);
        let two = calculate_recipe_nutrition(&usages, 3, 2.0);

        assert!((two.calories - 2.0 * one.calories).abs() <= 0.1);
        assert!((two.protein - 2.0 * one.protein).abs() <= 0.1);
        assert!((two.fat - 2.0 * one.fat).abs() <= 0.1);
    }

    #[test]
    fn rounding_boundary_is_half_away_from_zero() {
        // 0.05 per 100g over 100g stays 0.05 before rounding.
        let per_100g = NutrientRecord {
            sugar: 0.05,
            ..Default::default()
        };
        let usages = vec![usage(100.0, Some(per_100g))];
        let totals = calculate_recipe_nutrition(&usages, 1, 1.0);
        assert_eq!(totals.sugar, 0.1);
    }

    #[test]
    fn per_serving_breakdown_divides_totals() {
        let usages = vec![usage(150.0, Some(egg_per_100g()))];
        let breakdown = recipe_nutrition_breakdown(&usages, 3);

        assert_eq!(breakdown.total.calories, 232.5);
        assert_eq!(breakdown.per_serving.calories, 77.5);
        assert_eq!(breakdown.ingredients.len(), 1);
        assert_eq!(breakdown.ingredients[0].nutrition.calories, 232.5);
    }

    #[test]
    fn per_serving_is_zero_when_servings_not_positive() {
        let usages = vec![usage(150.0, Some(egg_per_100g()))];
        let breakdown = recipe_nutrition_breakdown(&usages, 0);
        assert_eq!(breakdown.per_serving, NutrientRecord::default());
    }

    #[test]
    fn weekly_average_of_constant_week_is_the_constant() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let days: Vec<DailyIntake> = (0..7)
            .map(|offset| DailyIntake {
                date: start + Duration::days(offset),
                calories: 1800.0,
                protein: 80.0,
                carbs: 220.0,
                fat: 60.0,
            })
            .collect();

        let average = weekly_average(&days);
        assert_eq!(average.avg_calories, 1800.0);
        assert_eq!(average.avg_protein, 80.0);
        assert_eq!(average.avg_carbs, 220.0);
        assert_eq!(average.avg_fat, 60.0);
    }

    #[test]
    fn weekly_average_of_empty_series_is_zero() {
        assert_eq!(weekly_average(&[]), WeeklyAverage::default());
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(95.0), TargetStatus::Achieved);
        assert_eq!(classify(94.9), TargetStatus::Close);
        assert_eq!(classify(90.0), TargetStatus::Close);
        assert_eq!(classify(89.9), TargetStatus::Under);
    }

    #[test]
    fn zero_target_yields_zero_rate() {
        let mut targets = BTreeMap::new();
        targets.insert("protein".to_string(), 0.0);
        let actual = NutrientRecord {
            protein: 50.0,
            ..Default::default()
        };

        let analysis = analyze_targets(&targets, &actual);
        let entry = &analysis["protein"];
        assert_eq!(entry.achievement_rate, 0.0);
        assert_eq!(entry.status, TargetStatus::Under);
    }

    #[test]
    fn unknown_target_keys_are_skipped() {
        let mut targets = BTreeMap::new();
        targets.insert("caffeine".to_string(), 400.0);
        let analysis = analyze_targets(&targets, &NutrientRecord::default());
        assert!(analysis.is_empty());
    }

    #[test]
    fn under_protein_produces_high_priority_recommendation() {
        let mut targets = BTreeMap::new();
        targets.insert("protein".to_string(), 100.0);
        let actual = NutrientRecord {
            protein: 50.0,
            ..Default::default()
        };

        let analysis = analyze_targets(&targets, &actual);
        let recommendations = generate_recommendations(&analysis);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, "protein");
        assert_eq!(recommendations[0].priority, "high");
    }

    #[test]
    fn sodium_overshoot_produces_reduction_advice() {
        let mut targets = BTreeMap::new();
        targets.insert("sodium".to_string(), 2000.0);
        let actual = NutrientRecord {
            sodium: 3000.0,
            ..Default::default()
        };

        let analysis = analyze_targets(&targets, &actual);
        assert_eq!(analysis["sodium"].status, TargetStatus::Achieved);

        let recommendations = generate_recommendations(&analysis);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, "sodium");
    }

    struct FakeRepo {
        usages: HashMap<Uuid, Vec<IngredientUsage>>,
        by_date: HashMap<NaiveDate, Vec<PlannedMeal>>,
        plan_items: Vec<PlannedMeal>,
    }

    impl NutritionRepository for FakeRepo {
        async fn recipe_usages(&self, recipe_id: Uuid) -> Result<Vec<IngredientUsage>, CoreError> {
            Ok(self.usages.get(&recipe_id).cloned().unwrap_or_default())
        }

        async fn completed_meals_for_date(
            &self,
            _user_id: Uuid,
            date: NaiveDate,
        ) -> Result<Vec<PlannedMeal>, CoreError> {
            Ok(self.by_date.get(&date).cloned().unwrap_or_default())
        }

        async fn meals_for_plan(
            &self,
            _meal_plan_id: Uuid,
        ) -> Result<Vec<PlannedMeal>, CoreError> {
            Ok(self.plan_items.clone())
        }
    }

    fn fake_repo_with_omelette() -> (FakeRepo, Uuid, NaiveDate) {
        let recipe_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let mut usages = HashMap::new();
        usages.insert(recipe_id, vec![usage(150.0, Some(egg_per_100g()))]);

        let meal = PlannedMeal {
            recipe_id,
            recipe_title: "Omelette".to_string(),
            recipe_servings: 3,
            meal_type: MealType::Breakfast,
            planned_date: date,
            servings: 3.0,
        };

        let mut by_date = HashMap::new();
        by_date.insert(date, vec![meal.clone()]);

        let repo = FakeRepo {
            usages,
            by_date,
            plan_items: vec![meal],
        };

        (repo, recipe_id, date)
    }

    #[tokio::test]
    async fn daily_nutrition_sums_completed_meals() {
        let (repo, _, date) = fake_repo_with_omelette();
        let daily = daily_nutrition(&repo, Uuid::new_v4(), date).await.unwrap();

        assert_eq!(daily.totals.calories, 232.5);
        assert_eq!(daily.meals.len(), 1);
        assert_eq!(daily.meals[0].recipe_title, "Omelette");
    }

    #[tokio::test]
    async fn daily_nutrition_of_empty_day_is_zero() {
        let (repo, _, _) = fake_repo_with_omelette();
        let other = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let daily = daily_nutrition(&repo, Uuid::new_v4(), other).await.unwrap();

        assert_eq!(daily.totals, NutrientRecord::default());
        assert!(daily.meals.is_empty());
    }

    #[tokio::test]
    async fn weekly_nutrition_covers_seven_days() {
        let (repo, _, date) = fake_repo_with_omelette();
        let weekly = weekly_nutrition(&repo, Uuid::new_v4(), date).await.unwrap();

        assert_eq!(weekly.daily_data.len(), 7);
        assert_eq!(weekly.start_date, date - Duration::days(6));
        assert_eq!(weekly.end_date, date);
        // One omelette day out of seven.
        assert_eq!(weekly.average.avg_calories, round1(232.5 / 7.0));
    }

    #[tokio::test]
    async fn analyze_plan_builds_daily_breakdown_and_analysis() {
        let (repo, _, date) = fake_repo_with_omelette();
        let mut targets = BTreeMap::new();
        targets.insert("calories".to_string(), 250.0);

        let report = analyze_plan(&repo, Uuid::new_v4(), &targets).await.unwrap();

        assert_eq!(report.totals.calories, 232.5);
        assert_eq!(report.daily_breakdown.len(), 1);
        assert_eq!(report.daily_breakdown[&date].totals.calories, 232.5);

        let entry = &report.target_analysis["calories"];
        assert_eq!(entry.achievement_rate, 93.0);
        assert_eq!(entry.status, TargetStatus::Close);
        assert!(report.recommendations.is_empty());
    }
}
