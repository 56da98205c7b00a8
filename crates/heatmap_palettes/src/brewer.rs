//! Keypoint tables for the sequential and diverging gradient families, low to high.
//!
//! Colors come from the ColorBrewer 9-class sequential and 11-class diverging schemes.
//! Diverging tables run from ColorBrewer's last class to its first, which puts the cool
//! end of the red/blue style schemes at low densities.

pub(crate) struct Family {
    pub name: &'static str,
    pub colors: &'static [[u8; 3]],
}

pub(crate) const FAMILIES: &[Family] = &[
    Family {
        name: "Blues",
        colors: &[
            [247, 251, 255],
            [222, 235, 247],
            [198, 219, 239],
            [158, 202, 225],
            [107, 174, 214],
            [66, 146, 198],
            [33, 113, 181],
            [8, 81, 156],
            [8, 48, 107],
        ],
    },
    Family {
        name: "BuGn",
        colors: &[
            [247, 252, 253],
            [229, 245, 249],
            [204, 236, 230],
            [153, 216, 201],
            [102, 194, 164],
            [65, 174, 118],
            [35, 139, 69],
            [0, 109, 44],
            [0, 68, 27],
        ],
    },
    Family {
        name: "BuPu",
        colors: &[
            [247, 252, 253],
            [224, 236, 244],
            [191, 211, 230],
            [158, 188, 218],
            [140, 150, 198],
            [140, 107, 177],
            [136, 65, 157],
            [129, 15, 124],
            [77, 0, 75],
        ],
    },
    Family {
        name: "GnBu",
        colors: &[
            [247, 252, 240],
            [224, 243, 219],
            [204, 235, 197],
            [168, 221, 181],
            [123, 204, 196],
            [78, 179, 211],
            [43, 140, 190],
            [8, 104, 172],
            [8, 64, 129],
        ],
    },
    Family {
        name: "Greens",
        colors: &[
            [247, 252, 245],
            [229, 245, 224],
            [199, 233, 192],
            [161, 217, 155],
            [116, 196, 118],
            [65, 171, 93],
            [35, 139, 69],
            [0, 109, 44],
            [0, 68, 27],
        ],
    },
    Family {
        name: "Greys",
        colors: &[
            [255, 255, 255],
            [240, 240, 240],
            [217, 217, 217],
            [189, 189, 189],
            [150, 150, 150],
            [115, 115, 115],
            [82, 82, 82],
            [37, 37, 37],
            [0, 0, 0],
        ],
    },
    Family {
        name: "OrRd",
        colors: &[
            [255, 247, 236],
            [254, 232, 200],
            [253, 212, 158],
            [253, 187, 132],
            [252, 141, 89],
            [239, 101, 72],
            [215, 48, 31],
            [179, 0, 0],
            [127, 0, 0],
        ],
    },
    Family {
        name: "Oranges",
        colors: &[
            [255, 245, 235],
            [254, 230, 206],
            [253, 208, 162],
            [253, 174, 107],
            [253, 141, 60],
            [241, 105, 19],
            [217, 72, 1],
            [166, 54, 3],
            [127, 39, 4],
        ],
    },
    Family {
        name: "PuBu",
        colors: &[
            [255, 247, 251],
            [236, 231, 242],
            [208, 209, 230],
            [166, 189, 219],
            [116, 169, 207],
            [54, 144, 192],
            [5, 112, 176],
            [4, 90, 141],
            [2, 56, 88],
        ],
    },
    Family {
        name: "PuBuGn",
        colors: &[
            [255, 247, 251],
            [236, 226, 240],
            [208, 209, 230],
            [166, 189, 219],
            [103, 169, 207],
            [54, 144, 192],
            [2, 129, 138],
            [1, 108, 89],
            [1, 70, 54],
        ],
    },
    Family {
        name: "PuRd",
        colors: &[
            [247, 244, 249],
            [231, 225, 239],
            [212, 185, 218],
            [201, 148, 199],
            [223, 101, 176],
            [231, 41, 138],
            [206, 18, 86],
            [152, 0, 67],
            [103, 0, 31],
        ],
    },
    Family {
        name: "Purples",
        colors: &[
            [252, 251, 253],
            [239, 237, 245],
            [218, 218, 235],
            [188, 189, 220],
            [158, 154, 200],
            [128, 125, 186],
            [106, 81, 163],
            [84, 39, 143],
            [63, 0, 125],
        ],
    },
    Family {
        name: "RdPu",
        colors: &[
            [255, 247, 243],
            [253, 224, 221],
            [252, 197, 192],
            [250, 159, 181],
            [247, 104, 161],
            [221, 52, 151],
            [174, 1, 126],
            [122, 1, 119],
            [73, 0, 106],
        ],
    },
    Family {
        name: "Reds",
        colors: &[
            [255, 245, 240],
            [254, 224, 210],
            [252, 187, 161],
            [252, 146, 114],
            [251, 106, 74],
            [239, 59, 44],
            [203, 24, 29],
            [165, 15, 21],
            [103, 0, 13],
        ],
    },
    Family {
        name: "YlGn",
        colors: &[
            [255, 255, 229],
            [247, 252, 185],
            [217, 240, 163],
            [173, 221, 142],
            [120, 198, 121],
            [65, 171, 93],
            [35, 132, 67],
            [0, 104, 55],
            [0, 69, 41],
        ],
    },
    Family {
        name: "YlGnBu",
        colors: &[
            [255, 255, 217],
            [237, 248, 177],
            [199, 233, 180],
            [127, 205, 187],
            [65, 182, 196],
            [29, 145, 192],
            [34, 94, 168],
            [37, 52, 148],
            [8, 29, 88],
        ],
    },
    Family {
        name: "YlOrBr",
        colors: &[
            [255, 255, 229],
            [255, 247, 188],
            [254, 227, 145],
            [254, 196, 79],
            [254, 153, 41],
            [236, 112, 20],
            [204, 76, 2],
            [153, 52, 4],
            [102, 37, 6],
        ],
    },
    Family {
        name: "YlOrRd",
        colors: &[
            [255, 255, 204],
            [255, 237, 160],
            [254, 217, 118],
            [254, 178, 76],
            [253, 141, 60],
            [252, 78, 42],
            [227, 26, 28],
            [189, 0, 38],
            [128, 0, 38],
        ],
    },
    Family {
        name: "BrBG",
        colors: &[
            [0, 60, 48],
            [1, 102, 94],
            [53, 151, 143],
            [128, 205, 193],
            [199, 234, 229],
            [245, 245, 245],
            [246, 232, 195],
            [223, 194, 125],
            [191, 129, 45],
            [140, 81, 10],
            [84, 48, 5],
        ],
    },
    Family {
        name: "PiYG",
        colors: &[
            [39, 100, 25],
            [77, 146, 33],
            [127, 188, 65],
            [184, 225, 134],
            [230, 245, 208],
            [247, 247, 247],
            [253, 224, 239],
            [241, 182, 218],
            [222, 119, 174],
            [197, 27, 125],
            [142, 1, 82],
        ],
    },
    Family {
        name: "PRGn",
        colors: &[
            [0, 68, 27],
            [27, 120, 55],
            [90, 174, 97],
            [166, 219, 160],
            [217, 240, 211],
            [247, 247, 247],
            [231, 212, 232],
            [194, 165, 207],
            [153, 112, 171],
            [118, 42, 131],
            [64, 0, 75],
        ],
    },
    Family {
        name: "PuOr",
        colors: &[
            [45, 0, 75],
            [84, 39, 136],
            [128, 115, 172],
            [178, 171, 210],
            [216, 218, 235],
            [247, 247, 247],
            [254, 224, 182],
            [253, 184, 99],
            [224, 130, 20],
            [179, 88, 6],
            [127, 59, 8],
        ],
    },
    Family {
        name: "RdBu",
        colors: &[
            [5, 48, 97],
            [33, 102, 172],
            [67, 147, 195],
            [146, 197, 222],
            [209, 229, 240],
            [247, 247, 247],
            [253, 219, 199],
            [244, 165, 130],
            [214, 96, 77],
            [178, 24, 43],
            [103, 0, 31],
        ],
    },
    Family {
        name: "RdGy",
        colors: &[
            [26, 26, 26],
            [77, 77, 77],
            [135, 135, 135],
            [186, 186, 186],
            [224, 224, 224],
            [255, 255, 255],
            [253, 219, 199],
            [244, 165, 130],
            [214, 96, 77],
            [178, 24, 43],
            [103, 0, 31],
        ],
    },
    Family {
        name: "RdYlBu",
        colors: &[
            [49, 54, 149],
            [69, 117, 180],
            [116, 173, 209],
            [171, 217, 233],
            [224, 243, 248],
            [255, 255, 191],
            [254, 224, 144],
            [253, 174, 97],
            [244, 109, 67],
            [215, 48, 39],
            [165, 0, 38],
        ],
    },
    Family {
        name: "RdYlGn",
        colors: &[
            [0, 104, 55],
            [26, 152, 80],
            [102, 189, 99],
            [166, 217, 106],
            [217, 239, 139],
            [255, 255, 191],
            [254, 224, 139],
            [253, 174, 97],
            [244, 109, 67],
            [215, 48, 39],
            [165, 0, 38],
        ],
    },
    Family {
        name: "Spectral",
        colors: &[
            [94, 79, 162],
            [50, 136, 189],
            [102, 194, 165],
            [171, 221, 164],
            [230, 245, 152],
            [255, 255, 191],
            [254, 224, 139],
            [253, 174, 97],
            [244, 109, 67],
            [213, 62, 79],
            [158, 1, 66],
        ],
    },
];
