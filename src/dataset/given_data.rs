//! Recorded grade 10-12 enrollment, one constant per school year.
//!
//! Each record is 20 schools × 3 grades in row-major order; schools follow
//! ascending school code. `NAN` marks a count that was not recorded.

const NAN: f64 = f64::NAN;

pub const YEAR_2013: [f64; 60] = [
    641.0, 612.0, 597.0,
    197.0, 145.0, 147.0,
    501.0, 497.0, 498.0,
    238.0, 251.0, 210.0,
    462.0, 463.0, 394.0,
    423.0, 410.0, 376.0,
    442.0, 412.0, 428.0,
    289.0, 251.0, 237.0,
    429.0, 393.0, 359.0,
    582.0, 542.0, 554.0,
    189.0, 193.0, 160.0,
    178.0, 169.0, 149.0,
    201.0, 183.0, 142.0,
    582.0, 560.0, 528.0,
    509.0, 463.0, 482.0,
    291.0, 256.0, 286.0,
    590.0, 607.0, 553.0,
    198.0, 202.0, 192.0,
    281.0, 267.0, 302.0,
    NAN, NAN, NAN,
];

pub const YEAR_2014: [f64; 60] = [
    637.0, 603.0, 634.0,
    213.0, 174.0, 160.0,
    510.0, 512.0, 483.0,
    261.0, 211.0, 219.0,
    445.0, 457.0, 431.0,
    442.0, 402.0, 402.0,
    466.0, 457.0, 379.0,
    293.0, 256.0, 228.0,
    428.0, 367.0, 385.0,
    586.0, 597.0, 557.0,
    197.0, 205.0, 195.0,
    196.0, 167.0, 149.0,
    206.0, 172.0, 163.0,
    588.0, 549.0, 523.0,
    516.0, 483.0, 471.0,
    324.0, 270.0, 267.0,
    612.0, 576.0, 579.0,
    225.0, 179.0, 200.0,
    308.0, 277.0, 246.0,
    NAN, NAN, NAN,
];

pub const YEAR_2015: [f64; 60] = [
    659.0, 607.0, 623.0,
    180.0, 166.0, 166.0,
    545.0, 502.0, 499.0,
    243.0, 228.0, 219.0,
    452.0, 459.0, 452.0,
    441.0, 406.0, 422.0,
    448.0, 418.0, 393.0,
    272.0, 252.0, 236.0,
    404.0, 381.0, 369.0,
    626.0, 584.0, 529.0,
    219.0, 199.0, 173.0,
    190.0, 186.0, 165.0,
    207.0, 183.0, 165.0,
    591.0, 563.0, 546.0,
    517.0, 474.0, 463.0,
    322.0, 281.0, 295.0,
    599.0, 591.0, 599.0,
    201.0, 187.0, 167.0,
    298.0, 295.0, 256.0,
    467.0, 461.0, 472.0,
];

pub const YEAR_2016: [f64; 60] = [
    646.0, 641.0, 620.0,
    203.0, 183.0, 189.0,
    542.0, 498.0, 491.0,
    256.0, 261.0, 209.0,
    467.0, 468.0, 436.0,
    424.0, 417.0, 387.0,
    459.0, 425.0, 407.0,
    271.0, 290.0, 246.0,
    416.0, 397.0, 364.0,
    625.0, 602.0, 579.0,
    229.0, 175.0, 155.0,
    216.0, 158.0, 160.0,
    225.0, 175.0, 160.0,
    579.0, 552.0, 539.0,
    498.0, 456.0, 496.0,
    329.0, 285.0, 258.0,
    639.0, 585.0, 569.0,
    205.0, 223.0, 170.0,
    327.0, 311.0, 282.0,
    464.0, 462.0, 457.0,
];

pub const YEAR_2017: [f64; 60] = [
    642.0, 645.0, 635.0,
    187.0, 197.0, 156.0,
    547.0, 530.0, 485.0,
    261.0, 264.0, 247.0,
    495.0, 476.0, 408.0,
    449.0, 400.0, 381.0,
    488.0, 429.0, 444.0,
    270.0, 301.0, 255.0,
    454.0, 425.0, 413.0,
    648.0, 645.0, 607.0,
    215.0, 176.0, 211.0,
    191.0, 193.0, 183.0,
    209.0, 216.0, 174.0,
    625.0, 573.0, 589.0,
    523.0, 522.0, 444.0,
    291.0, 306.0, 293.0,
    634.0, 608.0, 616.0,
    199.0, 172.0, 174.0,
    326.0, 313.0, 295.0,
    500.0, 472.0, 467.0,
];

pub const YEAR_2018: [f64; 60] = [
    688.0, 660.0, 646.0,
    216.0, 200.0, 195.0,
    556.0, 542.0, 522.0,
    285.0, 222.0, 221.0,
    490.0, 455.0, 456.0,
    459.0, 439.0, 406.0,
    456.0, 448.0, 436.0,
    298.0, 251.0, 283.0,
    451.0, 435.0, 405.0,
    610.0, 610.0, 598.0,
    229.0, 210.0, 205.0,
    221.0, 201.0, 187.0,
    216.0, 183.0, 189.0,
    618.0, 587.0, 606.0,
    520.0, 500.0, 490.0,
    306.0, 297.0, 293.0,
    650.0, 620.0, 610.0,
    236.0, 213.0, 192.0,
    308.0, 290.0, 244.0,
    514.0, 479.0, 502.0,
];

pub const YEAR_2019: [f64; 60] = [
    703.0, 664.0, 670.0,
    198.0, 184.0, 175.0,
    569.0, 509.0, 527.0,
    288.0, 233.0, 220.0,
    482.0, 473.0, 444.0,
    430.0, 408.0, 402.0,
    498.0, 478.0, 458.0,
    309.0, 258.0, 281.0,
    443.0, 441.0, 452.0,
    653.0, 643.0, 617.0,
    225.0, 224.0, 207.0,
    194.0, 166.0, 191.0,
    191.0, 224.0, 139.0,
    601.0, 609.0, 586.0,
    544.0, 488.0, 493.0,
    302.0, 309.0, 275.0,
    626.0, 643.0, 617.0,
    250.0, 240.0, 197.0,
    341.0, 323.0, 269.0,
    509.0, 513.0, 459.0,
];

pub const YEAR_2020: [f64; 60] = [
    705.0, 658.0, 687.0,
    194.0, 189.0, 175.0,
    552.0, 534.0, 532.0,
    252.0, 228.0, 264.0,
    511.0, 527.0, 474.0,
    447.0, 466.0, 444.0,
    504.0, 437.0, 453.0,
    308.0, 289.0, 281.0,
    443.0, 446.0, 424.0,
    646.0, 652.0, 616.0,
    229.0, 186.0, 169.0,
    226.0, 184.0, 201.0,
    189.0, 185.0, 215.0,
    656.0, 596.0, 596.0,
    539.0, 501.0, 493.0,
    341.0, 333.0, 299.0,
    665.0, 616.0, 589.0,
    242.0, 231.0, 219.0,
    328.0, 324.0, 301.0,
    506.0, 472.0, 467.0,
];

pub const YEAR_2021: [f64; 60] = [
    703.0, 705.0, 671.0,
    230.0, 183.0, 173.0,
    574.0, 533.0, 519.0,
    277.0, 261.0, 236.0,
    515.0, 487.0, 469.0,
    441.0, 426.0, 410.0,
    512.0, 465.0, 458.0,
    320.0, 297.0, 279.0,
    468.0, 471.0, 425.0,
    638.0, 638.0, 611.0,
    233.0, 202.0, 170.0,
    217.0, 210.0, 185.0,
    216.0, 186.0, 149.0,
    651.0, 644.0, 605.0,
    538.0, 542.0, 518.0,
    342.0, 314.0, 259.0,
    668.0, 622.0, 663.0,
    225.0, 193.0, 238.0,
    343.0, 295.0, 300.0,
    499.0, 485.0, 451.0,
];

pub const YEAR_2022: [f64; 60] = [
    690.0, 709.0, 711.0,
    210.0, 188.0, 179.0,
    554.0, 594.0, 545.0,
    287.0, 285.0, 271.0,
    549.0, 492.0, 534.0,
    469.0, 471.0, 401.0,
    509.0, 466.0, 455.0,
    288.0, 255.0, 251.0,
    480.0, 444.0, 432.0,
    668.0, 676.0, 596.0,
    212.0, 186.0, 197.0,
    237.0, 197.0, 165.0,
    240.0, 223.0, 175.0,
    634.0, 624.0, 582.0,
    554.0, 537.0, 508.0,
    338.0, 292.0, 301.0,
    668.0, 675.0, 653.0,
    223.0, 243.0, 185.0,
    337.0, 290.0, 307.0,
    509.0, 532.0, 485.0,
];

/// The yearly records in ascending calendar order, 2013 first.
pub const RECORDS: [&[f64; 60]; 10] = [
    &YEAR_2013,
    &YEAR_2014,
    &YEAR_2015,
    &YEAR_2016,
    &YEAR_2017,
    &YEAR_2018,
    &YEAR_2019,
    &YEAR_2020,
    &YEAR_2021,
    &YEAR_2022,
];
