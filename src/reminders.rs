// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Stateless derivation of user-facing alerts from current store
//! contents. Nothing here mutates the store; every check is computed
//! against an injected `today` so callers and tests agree on the clock.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Frequency, RecurringTransaction};
use crate::recurrence;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetAlert {
    pub category: String,
    pub percentage: Decimal,
    pub spent: Decimal,
    pub amount: Decimal,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct DebtAlert {
    pub person: String,
    pub remaining: Decimal,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalAlert {
    pub name: String,
    pub percentage: Decimal,
    pub remaining: Decimal,
    pub deadline: NaiveDate,
    pub days_until_deadline: i64,
    pub severity: Severity,
}

/// Flattened entry for the notification feed.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

pub struct ReminderEngine<'a> {
    store: &'a Store,
    today: NaiveDate,
}

impl<'a> ReminderEngine<'a> {
    pub fn new(store: &'a Store, today: NaiveDate) -> Self {
        ReminderEngine { store, today }
    }

    /// Patterns whose cursor has arrived (same rule the recurrence
    /// engine materializes from).
    pub fn due_recurring(&self) -> Result<Vec<RecurringTransaction>> {
        recurrence::due_patterns(self.store, self.today)
    }

    /// A budget alerts once spent crosses its alert threshold; crossing
    /// 100% raises the severity.
    pub fn budget_alerts(&self) -> Result<Vec<BudgetAlert>> {
        let mut alerts = Vec::new();
        for row in self.store.get_budgets()? {
            let b = &row.budget;
            let percentage = b.percentage_used();
            if percentage >= b.alert_percentage {
                alerts.push(BudgetAlert {
                    category: row.category_name.unwrap_or_else(|| "Unknown".to_string()),
                    percentage,
                    spent: b.spent,
                    amount: b.amount,
                    severity: if percentage >= Decimal::ONE_HUNDRED {
                        Severity::High
                    } else {
                        Severity::Medium
                    },
                });
            }
        }
        Ok(alerts)
    }

    /// Unsettled debts due within a week; overdue debts are high
    /// severity.
    pub fn debt_alerts(&self) -> Result<Vec<DebtAlert>> {
        let mut alerts = Vec::new();
        for debt in self.store.get_debts()? {
            if debt.settled {
                continue;
            }
            let Some(due_date) = debt.due_date else {
                continue;
            };
            let days_until_due = (due_date - self.today).num_days();
            if days_until_due <= 7 {
                alerts.push(DebtAlert {
                    person: debt.person_name.clone(),
                    remaining: debt.amount - debt.amount_paid,
                    due_date,
                    days_until_due,
                    severity: if days_until_due <= 0 {
                        Severity::High
                    } else {
                        Severity::Medium
                    },
                });
            }
        }
        Ok(alerts)
    }

    /// Incomplete goals whose deadline is within 30 days and that are
    /// not yet fully funded.
    pub fn goal_alerts(&self) -> Result<Vec<GoalAlert>> {
        let mut alerts = Vec::new();
        for goal in self.store.get_goals()? {
            if goal.completed {
                continue;
            }
            let Some(deadline) = goal.deadline else {
                continue;
            };
            let days_until_deadline = (deadline - self.today).num_days();
            let percentage = goal.percentage_complete();
            if days_until_deadline <= 30 && percentage < Decimal::ONE_HUNDRED {
                alerts.push(GoalAlert {
                    name: goal.name.clone(),
                    percentage,
                    remaining: goal.remaining_amount(),
                    deadline,
                    days_until_deadline,
                    severity: Severity::Low,
                });
            }
        }
        Ok(alerts)
    }

    /// Every pending notification: recurring-due first, then budget,
    /// debt, and goal alerts. No deduplication or snoozing.
    pub fn all_notifications(&self) -> Result<Vec<Notification>> {
        let mut out = Vec::new();

        for pattern in self.due_recurring()? {
            let cadence = match pattern.frequency {
                Frequency::Custom => format!("every {} days", pattern.interval),
                f => f.as_str().to_lowercase(),
            };
            out.push(Notification {
                title: "Recurring Transaction Due".to_string(),
                message: format!("{} - ${:.2} ({})", pattern.description, pattern.amount, cadence),
                severity: Severity::Medium,
            });
        }

        for a in self.budget_alerts()? {
            out.push(Notification {
                title: "Budget Alert".to_string(),
                message: format!(
                    "{} at {:.0}% ({:.2} of {:.2})",
                    a.category,
                    a.percentage,
                    a.spent,
                    a.amount
                ),
                severity: a.severity,
            });
        }

        for a in self.debt_alerts()? {
            let when = if a.days_until_due <= 0 {
                "overdue".to_string()
            } else {
                format!("due in {} days", a.days_until_due)
            };
            out.push(Notification {
                title: "Debt Due".to_string(),
                message: format!("{:.2} to settle with {} ({})", a.remaining, a.person, when),
                severity: a.severity,
            });
        }

        for a in self.goal_alerts()? {
            out.push(Notification {
                title: "Goal Deadline".to_string(),
                message: format!(
                    "{} at {:.0}%, {:.2} to go by {}",
                    a.name, a.percentage, a.remaining, a.deadline
                ),
                severity: a.severity,
            });
        }

        Ok(out)
    }
}
