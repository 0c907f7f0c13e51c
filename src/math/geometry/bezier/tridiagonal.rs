// src/math/geometry/bezier/tridiagonal.rs

use std::ops::{Div, Mul, Sub};

/// Hauptdiagonale des Systems für die ersten Kontrollpunkte:
/// 2 in der ersten Zeile, 4 im Inneren, 3.5 in der letzten Zeile.
pub fn first_control_diagonal(row: usize, rows: usize) -> f32 {
    if row == 0 {
        2.0
    } else if row + 1 < rows {
        4.0
    } else {
        3.5
    }
}

/// Löst das tridiagonale System für die ersten Kontrollpunkte (Thomas-Algorithmus).
///
/// ```text
/// | 2 1             |   | x0   |   | rhs0   |
/// | 1 4 1           |   | x1   |   | rhs1   |
/// |   1 4 1         | * | ...  | = | ...    |
/// |       ...       |   |      |   |        |
/// |           1 3.5 |   | xn-1 |   | rhsn-1 |
/// ```
///
/// Die Nebendiagonalen sind überall 1. `T` ist ein Skalar oder ein Vektor-Typ; bei
/// Vektoren laufen alle Operationen komponentenweise, jede Achse wird also unabhängig
/// gelöst.
pub fn solve_first_control_points<T>(rhs: &[T]) -> Vec<T>
where
    T: Copy + Sub<Output = T> + Mul<f32, Output = T> + Div<f32, Output = T>,
{
    let rows = rhs.len();
    let Some(&first) = rhs.first() else {
        return Vec::new();
    };

    let mut solution = Vec::with_capacity(rows);
    // Eliminationsfaktoren 1/b der Vorgängerzeile
    let mut factors = vec![0.0f32; rows];

    // Zerlegung und Vorwärtssubstitution
    let mut b = first_control_diagonal(0, rows);
    solution.push(first / b);
    for i in 1..rows {
        factors[i] = 1.0 / b;
        b = first_control_diagonal(i, rows) - factors[i];
        let value = (rhs[i] - solution[i - 1]) / b;
        solution.push(value);
    }

    // Rückwärtssubstitution
    for i in (0..rows - 1).rev() {
        solution[i] = solution[i] - solution[i + 1] * factors[i + 1];
    }

    solution
}
