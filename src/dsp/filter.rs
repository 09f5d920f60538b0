/*
One-Pole Low-Pass
=================

The simplest recursive smoother:

    y[0] = x[0]
    y[n] = a · x[n] + (1 - a) · y[n-1]

`a` is the cutoff coefficient in (0, 1]. At 1.0 the output is the input;
smaller values average more history and roll off more highs (6 dB/octave).

| a    | character                         |
| ---- | --------------------------------- |
| 1.0  | no filtering                      |
| 0.5  | gentle darkening                  |
| 0.1  | heavy, muffled                    |

The filter is seeded from the first sample of each buffer it renders, so it
carries no state from one block to the next.
*/

/// Run the one-pole recursion over `buffer` in place, seeding from `buffer[0]`.
pub fn one_pole_lowpass(buffer: &mut [f32], cutoff: f32) {
    let Some((first, rest)) = buffer.split_first_mut() else {
        return;
    };

    let mut prev = *first;
    for sample in rest.iter_mut() {
        prev = cutoff * *sample + (1.0 - cutoff) * prev;
        *sample = prev;
    }
}
