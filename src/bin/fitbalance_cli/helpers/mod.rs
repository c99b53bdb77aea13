// ABOUTME: Helper modules for fitbalance-cli
// ABOUTME: Output format selection and text rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
