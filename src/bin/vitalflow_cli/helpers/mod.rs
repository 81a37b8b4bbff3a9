// ABOUTME: Helper modules for vitalflow-cli
// ABOUTME: Text rendering of plans, recipes and challenges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

pub mod display;
