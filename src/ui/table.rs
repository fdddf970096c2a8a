use crate::record::{Brand, Model, ModelWithBrand, WindshieldRecord};
use crate::storage::DbStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Brand")]
    name: String,
}

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Model")]
    name: String,
    #[tabled(rename = "Brand Id")]
    brand_id: i64,
}

#[derive(Tabled)]
struct ModelWithBrandRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Model")]
    name: String,
    #[tabled(rename = "Brand")]
    brand_name: String,
}

#[derive(Tabled)]
struct PartRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Stock")]
    stock: i64,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    if rows.is_empty() {
        return String::new();
    }
    Table::new(&rows).with(Style::rounded()).to_string()
}

pub fn brands_table(brands: &[Brand]) -> String {
    render(
        brands
            .iter()
            .map(|b| BrandRow {
                id: b.id,
                name: b.name.clone(),
            })
            .collect(),
    )
}

pub fn models_table(models: &[Model]) -> String {
    render(
        models
            .iter()
            .map(|m| ModelRow {
                id: m.id,
                name: m.name.clone(),
                brand_id: m.brand_id,
            })
            .collect(),
    )
}

pub fn models_with_brand_table(models: &[ModelWithBrand]) -> String {
    render(
        models
            .iter()
            .map(|m| ModelWithBrandRow {
                id: m.id,
                name: m.name.clone(),
                brand_name: m.brand_name.clone(),
            })
            .collect(),
    )
}

pub fn parts_table(parts: &[WindshieldRecord]) -> String {
    render(
        parts
            .iter()
            .map(|p| PartRow {
                id: p.id,
                location: p.location.to_string(),
                year: p.year.clone(),
                stock: p.stock,
            })
            .collect(),
    )
}

pub fn stats_table(stats: &DbStats) -> String {
    #[derive(Tabled)]
    struct StatRow {
        #[tabled(rename = "Metric")]
        metric: String,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        StatRow {
            metric: "Brands".to_string(),
            value: stats.brands.to_string(),
        },
        StatRow {
            metric: "Models".to_string(),
            value: stats.models.to_string(),
        },
        StatRow {
            metric: "Part records".to_string(),
            value: stats.parts.to_string(),
        },
        StatRow {
            metric: "Total stock".to_string(),
            value: stats.total_stock.to_string(),
        },
    ];
    render(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_render_nothing() {
        assert!(brands_table(&[]).is_empty());
        assert!(models_table(&[]).is_empty());
    }

    #[test]
    fn test_brand_table_contains_name() {
        let table = brands_table(&[Brand {
            id: 1,
            name: "Toyota".to_string(),
        }]);
        assert!(table.contains("Toyota"));
    }
}
