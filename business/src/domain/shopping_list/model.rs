use uuid::Uuid;

pub const SHOPPING_LIST_TITLE: &str = "Shopping list:";
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

/// Total quantity of one ingredient/unit pair across a user's cart.
/// Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ingredient_id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    pub lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    pub fn render(&self) -> String {
        render(&self.lines)
    }
}

/// Plain-text shopping list: a title line, then one
/// `<name> - <total> <unit>` line per entry, in the given order.
pub fn render(lines: &[AggregatedLine]) -> String {
    let mut out = String::with_capacity(SHOPPING_LIST_TITLE.len() + 1 + lines.len() * 24);
    out.push_str(SHOPPING_LIST_TITLE);
    out.push('\n');
    for line in lines {
        out.push_str(&format!(
            "{} - {} {}\n",
            line.name, line.total_amount, line.measurement_unit
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, total: i64, unit: &str) -> AggregatedLine {
        AggregatedLine {
            ingredient_id: Uuid::new_v4(),
            name: name.to_string(),
            measurement_unit: unit.to_string(),
            total_amount: total,
        }
    }

    #[test]
    fn should_render_title_only_for_empty_list() {
        assert_eq!(ShoppingList::default().render(), "Shopping list:\n");
    }

    #[test]
    fn should_render_one_line_per_ingredient_in_order() {
        let list = ShoppingList {
            lines: vec![
                line("egg", 3, "pcs"),
                line("flour", 300, "g"),
                line("sugar", 50, "g"),
            ],
        };

        assert_eq!(
            list.render(),
            "Shopping list:\negg - 3 pcs\nflour - 300 g\nsugar - 50 g\n"
        );
    }
}
