// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod backup;
pub mod budgets;
pub mod categories;
pub mod debts;
pub mod exporter;
pub mod goals;
pub mod notify;
pub mod recurring;
pub mod reports;
pub mod settings;
pub mod transactions;
