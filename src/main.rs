// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezedit: headless bezier path editor

fn main() -> anyhow::Result<()> {
    bezedit::run()
}
