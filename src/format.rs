use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parse::Day;

/// Chat message for one day. `{date}` is the French date heading, every other
/// placeholder is a category name. Items are wrapped in `_` for italics.
pub const TEMPLATE: &str = concat!(
    "\n",
    "*Menu du {date}* \n",
    "\n",
    "Potage / Entrée: _{potage_entree}_\n",
    "Entrée classique: _{entree_classique}_\n",
    "Entrée sans porc: _{entree_sans_porc}_\n",
    "Entrée sans viande: _{entree_sans_viande}_\n",
    "Entrée végétarien: _{entree_vg}_\n",
    "\n",
    "Plat classique: _{plat_classique}_\n",
    "Plat sans porc: _{plat_sans_porc}_\n",
    "Plat sans viande: _{plat_sans_viande}_\n",
    "Plat végétarien: _{plat_vg}_\n",
    "Garniture classique: _{garniture_classique}_\n",
    "Garniture sans porc: _{garniture_sans_porc}_\n",
    "Garniture sans viande: _{garniture_sans_viande}_\n",
    "Garniture végétarien: _{garniture_vg}_\n",
    "\n",
    "Produit laitier: _{produit_laitier}_\n",
    "\n",
    "Dessert: _{dessert}_\n",
    "\n",
    "Goûter 1: _{gouter_1}_\n",
    "Goûter 2: _{gouter_2}_\n",
    "\n",
    "Bonne journée !\n",
);

/// Fills [`TEMPLATE`] with `day`.
///
/// An empty item leaves `__` behind, which is removed so the line reads as
/// plain text instead of an empty emphasis.
pub fn render(day: &Day) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("regex should be valid"));
    let label = day.label();
    let filled = re.replace_all(TEMPLATE, |caps: &Captures| {
        let key = &caps[1];
        if key == "date" {
            label.clone()
        } else {
            day.get(key).unwrap_or(&caps[0]).to_owned()
        }
    });
    filled.replace("__", "")
}
