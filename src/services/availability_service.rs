//! Filtro de disponibilidad
//!
//! Dada una ventana de consulta `[start_time, end_time]`, decide qué
//! sujetos (staff o vehículos) NO están comprometidos por una orden en
//! conflicto. Este es el predicado que comparten los listados de staff,
//! de vehículos y los conteos del catálogo de venta.
//!
//! Reglas:
//! - Si falta cualquiera de los dos extremos, no se filtra nada: el pool
//!   se devuelve sin cambios.
//! - Una orden entra en conflicto cuando su estado no es `void` y su
//!   `start_time` O su `end_time` cae dentro de la ventana (inclusive).
//!
//! Limitación conocida y preservada deliberadamente: una orden que
//! contiene por completo la ventana consultada (empieza antes y termina
//! después) no toca ninguno de los dos extremos y por lo tanto NO se
//! detecta como conflicto. Los listados SQL de los repositorios replican
//! exactamente el mismo predicado para que ambos caminos coincidan.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::order::OrderStatus;

/// Ventana de consulta con ambos extremos presentes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl AvailabilityWindow {
    /// Construir la ventana solo si ambos extremos fueron provistos
    ///
    /// Con un solo extremo no hay filtro de tiempo: se devuelve `None`
    /// y el pool completo pasa sin tocar.
    pub fn from_bounds(
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        match (start_time, end_time) {
            (Some(start_time), Some(end_time)) => Some(Self {
                start_time,
                end_time,
            }),
            _ => None,
        }
    }

    /// Pertenencia inclusiva en ambos extremos
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_time <= instant && instant <= self.end_time
    }

    /// ¿La orden entra en conflicto con esta ventana?
    pub fn conflicts_with(&self, span: &OrderSpan) -> bool {
        if span.status == OrderStatus::Void {
            return false;
        }
        self.contains(span.start_time) || self.contains(span.end_time)
    }
}

/// Rango de una orden existente, reducido a lo que necesita el filtro
#[derive(Debug, Clone, FromRow)]
pub struct OrderSpan {
    pub subject_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Filtrar el pool de sujetos contra sus órdenes existentes
///
/// Devuelve los ids sin conflicto, en el orden original del pool.
/// Solo lectura: nunca muta órdenes ni sujetos.
pub fn filter_available(
    subject_ids: &[Uuid],
    spans: &[OrderSpan],
    window: Option<&AvailabilityWindow>,
) -> Vec<Uuid> {
    let Some(window) = window else {
        // Sin ventana completa no hay filtro
        return subject_ids.to_vec();
    };

    subject_ids
        .iter()
        .filter(|id| {
            !spans
                .iter()
                .any(|span| span.subject_id == **id && window.conflicts_with(span))
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn span(subject_id: Uuid, start_day: u32, end_day: u32, status: OrderStatus) -> OrderSpan {
        OrderSpan {
            subject_id,
            start_time: ts(start_day),
            end_time: ts(end_day),
            status,
        }
    }

    fn window(start_day: u32, end_day: u32) -> AvailabilityWindow {
        AvailabilityWindow {
            start_time: ts(start_day),
            end_time: ts(end_day),
        }
    }

    #[test]
    fn test_from_bounds_requires_both_ends() {
        assert!(AvailabilityWindow::from_bounds(Some(ts(1)), Some(ts(2))).is_some());
        assert!(AvailabilityWindow::from_bounds(Some(ts(1)), None).is_none());
        assert!(AvailabilityWindow::from_bounds(None, Some(ts(2))).is_none());
        assert!(AvailabilityWindow::from_bounds(None, None).is_none());
    }

    #[test]
    fn test_missing_bound_returns_pool_unchanged() {
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 10, 15, OrderStatus::Open)];

        let available = filter_available(&[subject], &spans, None);
        assert_eq!(available, vec![subject]);
    }

    #[test]
    fn test_end_time_inside_window_excludes_subject() {
        // Orden [10, 15], ventana [12, 20]: el end_time 15 cae dentro
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 10, 15, OrderStatus::Open)];

        let available = filter_available(&[subject], &spans, Some(&window(12, 20)));
        assert!(available.is_empty());
    }

    #[test]
    fn test_start_time_inside_window_excludes_subject() {
        // Orden [18, 25], ventana [12, 20]: el start_time 18 cae dentro
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 18, 25, OrderStatus::InProgress)];

        let available = filter_available(&[subject], &spans, Some(&window(12, 20)));
        assert!(available.is_empty());
    }

    #[test]
    fn test_disjoint_order_keeps_subject() {
        // Orden [10, 15], ventana [1, 8]: ningún extremo cae dentro
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 10, 15, OrderStatus::Open)];

        let available = filter_available(&[subject], &spans, Some(&window(1, 8)));
        assert_eq!(available, vec![subject]);
    }

    #[test]
    fn test_containing_order_is_not_detected() {
        // Limitación preservada: la orden [10, 15] contiene por completo
        // la ventana [11, 12] y aun así el sujeto se considera libre.
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 10, 15, OrderStatus::Open)];

        let available = filter_available(&[subject], &spans, Some(&window(11, 12)));
        assert_eq!(available, vec![subject]);
    }

    #[test]
    fn test_void_order_never_conflicts() {
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 10, 15, OrderStatus::Void)];

        let available = filter_available(&[subject], &spans, Some(&window(12, 20)));
        assert_eq!(available, vec![subject]);
    }

    #[test]
    fn test_inclusive_endpoints() {
        // La ventana [15, 20] toca exactamente el end_time 15
        let subject = Uuid::new_v4();
        let spans = vec![span(subject, 10, 15, OrderStatus::Completed)];

        let available = filter_available(&[subject], &spans, Some(&window(15, 20)));
        assert!(available.is_empty());
    }

    #[test]
    fn test_filter_only_affects_conflicting_subjects() {
        let busy = Uuid::new_v4();
        let free = Uuid::new_v4();
        let spans = vec![
            span(busy, 10, 15, OrderStatus::Open),
            span(free, 1, 5, OrderStatus::Open),
        ];

        let available = filter_available(&[busy, free], &spans, Some(&window(12, 20)));
        assert_eq!(available, vec![free]);
    }
}
