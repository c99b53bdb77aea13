// ABOUTME: Re-exports command modules for fitbalance-cli
// ABOUTME: Profile, diet, exercise, report and food catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod diet;
pub mod exercise;
pub mod food;
pub mod profile;
pub mod report;
