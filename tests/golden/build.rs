// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR should be defined");
    fixture_emitter::Emitter::new()
        .out_dir(out_dir)
        .run()
        .expect("That should have worked. :(");
}
