use formula_core::model::{Catalog, Formula, FormulaId};

use crate::error::CatalogLoadError;

// (id, title, question, answer, hint)
const ALGEBRA_8: &[(u64, &str, &str, &str, Option<&str>)] = &[
    (
        1,
        "Квадрат суммы",
        "(a + b)² = ?",
        "a² + 2ab + b²",
        Some("Квадрат первого плюс удвоенное произведение плюс квадрат второго"),
    ),
    (
        2,
        "Квадрат разности",
        "(a − b)² = ?",
        "a² − 2ab + b²",
        Some("Как квадрат суммы, только удвоенное произведение со знаком минус"),
    ),
    (
        3,
        "Разность квадратов",
        "a² − b² = ?",
        "(a − b)(a + b)",
        Some("Произведение разности и суммы"),
    ),
    (
        4,
        "Дискриминант",
        "D = ? для ax² + bx + c = 0",
        "D = b² − 4ac",
        Some("Квадрат второго коэффициента минус учетверённое произведение двух других"),
    ),
    (
        5,
        "Корни квадратного уравнения",
        "x₁,₂ = ? для ax² + bx + c = 0",
        "x₁,₂ = (−b ± √D) / 2a",
        Some("Сначала найдите дискриминант"),
    ),
    (
        6,
        "Теорема Виета",
        "x₁ + x₂ = ?, x₁ · x₂ = ? для x² + px + q = 0",
        "x₁ + x₂ = −p, x₁ · x₂ = q",
        Some("Сумма корней равна второму коэффициенту с противоположным знаком"),
    ),
    (
        7,
        "Свойство корня",
        "√(a · b) = ? при a ≥ 0, b ≥ 0",
        "√a · √b",
        None,
    ),
    (
        8,
        "Степень с отрицательным показателем",
        "a⁻ⁿ = ? при a ≠ 0",
        "1 / aⁿ",
        Some("Отрицательный показатель переворачивает дробь"),
    ),
    (
        9,
        "Теорема Пифагора",
        "c² = ? в прямоугольном треугольнике",
        "c² = a² + b²",
        Some("Квадрат гипотенузы равен сумме квадратов катетов"),
    ),
    (
        10,
        "Площадь треугольника",
        "S = ?",
        "S = ½ · a · h",
        Some("Половина произведения основания на высоту"),
    ),
    (
        11,
        "Площадь трапеции",
        "S = ?",
        "S = (a + b) / 2 · h",
        Some("Полусумма оснований, умноженная на высоту"),
    ),
    (
        12,
        "Площадь ромба",
        "S = ? через диагонали",
        "S = ½ · d₁ · d₂",
        None,
    ),
];

/// The bundled 8th-grade math catalog.
///
/// # Errors
///
/// Returns `CatalogLoadError` if a bundled record is invalid.
pub fn builtin_catalog() -> Result<Catalog, CatalogLoadError> {
    let formulas = ALGEBRA_8
        .iter()
        .map(|(id, title, question, answer, hint)| {
            Formula::new(
                FormulaId::new(*id),
                *title,
                *question,
                *answer,
                hint.map(str::to_string),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(formulas)?)
}
