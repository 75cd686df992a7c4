use super::Conditions;

/// Net heat gain at 38 degrees in [`desert`] conditions with minimum
/// evaporation and no motor activity.
pub(crate) const GOLDEN_NET_WATTS: f64 = 2.825_752_065_992_054;

/// Sunny desert: 35 degree air, 40 degree ground, minimum evaporation.
pub(crate) fn desert(action: &[f64]) -> Conditions<'_> {
    Conditions {
        action,
        evaporative_action: -1.0,
        temp_air: 35.0,
        temp_earth: 40.0,
        is_shade: false,
    }
}
