//! Fixed DMC thread-color catalog and perceptual nearest-color matching.
//!
//! The catalog is read-only process-wide state: a const table of
//! `(code, name, hex)` triples, plus a lazily initialized cache of
//! precomputed LAB values used by the CIEDE2000 matcher.

use palette::{color_difference::Ciede2000, white_point::D65, FromColor, Lab, Srgb};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::PatternError;

/// A thread color in the shape the save format stores.
///
/// Color equality is hex equality; two entries with the same hex are the
/// same color for palette deduplication purposes even if their codes differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadColor {
    pub dmc: String,
    pub name: String,
    pub hex: String,
}

impl ThreadColor {
    /// The color value as an RGB triplet.
    ///
    /// Fails with `InvalidColor` if the hex field is malformed, which can
    /// only happen for entries deserialized from external data.
    pub fn rgb(&self) -> Result<[u8; 3], PatternError> {
        parse_hex(&self.hex)
    }
}

/// Official DMC thread palette, ordered by catalog code.
/// Each entry: (code, name, hex)
const DMC_CATALOG: &[(&str, &str, &str)] = &[
    ("B5200", "Snow White", "#FFFFFF"),
    ("White", "White", "#FEFEFE"),
    ("Ecru", "Ecru", "#F0EBD5"),
    ("150", "Ultra Very Dark Dusty Rose", "#AB0249"),
    ("151", "Very Light Dusty Rose", "#F0CED4"),
    ("152", "Medium Light Shell Pink", "#E2A099"),
    ("153", "Very Light Violet", "#E6CCD9"),
    ("154", "Very Dark Grape", "#572433"),
    ("155", "Medium Dark Blue Violet", "#9891B6"),
    ("156", "Medium Light Blue Violet", "#A3AED1"),
    ("157", "Very Light Cornflower Blue", "#BBC3D9"),
    ("158", "Very Dark Cornflower Blue", "#4C526E"),
    ("159", "Light Blue Gray", "#C7CAD7"),
    ("160", "Medium Blue Gray", "#999FB7"),
    ("161", "Blue Gray", "#7880A4"),
    ("162", "Ultra Very Light Blue", "#DBECF5"),
    ("163", "Medium Celadon Green", "#4D8361"),
    ("164", "Light Forest Green", "#C7D9AD"),
    ("165", "Very Light Moss Green", "#EFF4A4"),
    ("166", "Medium Light Moss Green", "#C0C840"),
    ("167", "Very Dark Yellow Beige", "#A77C49"),
    ("168", "Very Light Pewter", "#D1D1D1"),
    ("169", "Light Pewter", "#848484"),
    ("208", "Very Dark Lavender", "#7F2A7B"),
    ("209", "Dark Lavender", "#9C4E97"),
    ("210", "Medium Lavender", "#C68FB9"),
    ("211", "Light Lavender", "#E8D8EA"),
    ("221", "Very Dark Shell Pink", "#883E43"),
    ("223", "Light Shell Pink", "#CC847C"),
    ("224", "Very Light Shell Pink", "#EBB7AF"),
    ("225", "Ultra Very Light Shell Pink", "#FFDFD6"),
    ("300", "Very Dark Mahogany", "#6F2F23"),
    ("301", "Medium Mahogany", "#B35F2B"),
    ("304", "Medium Red", "#B11731"),
    ("307", "Lemon", "#FFE600"),
    ("309", "Dark Rose", "#C54A69"),
    ("310", "Black", "#000000"),
    ("311", "Medium Navy Blue", "#1C3A5C"),
    ("312", "Very Dark Baby Blue", "#13416D"),
    ("315", "Medium Dark Antique Mauve", "#81454C"),
    ("316", "Medium Antique Mauve", "#B76D79"),
    ("317", "Pewter Gray", "#6B6D6D"),
    ("318", "Light Steel Gray", "#ADB0AE"),
    ("319", "Very Dark Pistachio Green", "#40502C"),
    ("320", "Medium Pistachio Green", "#8D9E57"),
    ("321", "Red", "#CE1938"),
    ("322", "Dark Baby Blue", "#2F5580"),
    ("326", "Very Dark Rose", "#B33B4B"),
    ("327", "Dark Violet", "#5C3A6E"),
    ("333", "Very Dark Blue Violet", "#6E5B9B"),
    ("334", "Medium Baby Blue", "#5D8AB8"),
    ("335", "Rose", "#EE546E"),
    ("336", "Navy Blue", "#13294B"),
    ("340", "Medium Blue Violet", "#ADA7C7"),
    ("341", "Light Blue Violet", "#B5CAE6"),
    ("347", "Very Dark Salmon", "#BF1733"),
    ("349", "Dark Coral", "#C81732"),
    ("350", "Medium Coral", "#E34948"),
    ("351", "Coral", "#EA8579"),
    ("352", "Light Coral", "#FBB9AA"),
    ("353", "Peach", "#FECDCD"),
    ("355", "Dark Terra Cotta", "#A44037"),
    ("356", "Medium Terra Cotta", "#C66F5C"),
    ("367", "Dark Pistachio Green", "#6B7B3C"),
    ("368", "Light Pistachio Green", "#A5BB87"),
    ("369", "Very Light Pistachio Green", "#D7E6C6"),
    ("370", "Medium Mustard", "#B89D64"),
    ("371", "Mustard", "#BFA671"),
    ("372", "Light Mustard", "#CCB784"),
    ("400", "Dark Mahogany", "#8F430F"),
    ("402", "Very Light Mahogany", "#F7A777"),
    ("407", "Medium Desert Sand", "#BC8D7E"),
    ("413", "Dark Pewter Gray", "#656666"),
    ("414", "Dark Steel Gray", "#8A8A8A"),
    ("415", "Pearl Gray", "#D3D3D3"),
    ("420", "Dark Hazelnut Brown", "#A07042"),
    ("422", "Light Hazelnut Brown", "#C69A6E"),
    ("433", "Medium Brown", "#85511F"),
    ("434", "Light Brown", "#944B14"),
    ("435", "Very Light Brown", "#945B25"),
    ("436", "Tan", "#C68638"),
    ("437", "Light Tan", "#D9A964"),
    ("444", "Dark Lemon", "#FFE00B"),
    ("445", "Light Lemon", "#FFFDDB"),
    ("451", "Dark Shell Gray", "#917B73"),
    ("452", "Medium Shell Gray", "#C0B3AC"),
    ("453", "Light Shell Gray", "#D7CCC6"),
    ("469", "Avocado Green", "#72843C"),
    ("470", "Light Avocado Green", "#94AB4F"),
    ("471", "Very Light Avocado Green", "#AEBF79"),
    ("472", "Ultra Light Avocado Green", "#D8E498"),
    ("498", "Dark Red", "#A81428"),
    ("500", "Very Dark Blue Green", "#044D33"),
    ("501", "Dark Blue Green", "#3D6E58"),
    ("502", "Blue Green", "#5A8274"),
    ("503", "Medium Blue Green", "#7BA291"),
    ("504", "Very Light Blue Green", "#C4DECC"),
    ("505", "Dark Grass Green", "#338362"),
    ("517", "Dark Wedgewood", "#3B768F"),
    ("518", "Light Wedgewood", "#4F93A7"),
    ("519", "Sky Blue", "#7EB1C8"),
    ("520", "Dark Fern Green", "#666D4F"),
    ("522", "Fern Green", "#969E7E"),
    ("523", "Light Fern Green", "#ABB197"),
    ("524", "Very Light Fern Green", "#C4CDAC"),
    ("535", "Very Light Ash Gray", "#696959"),
    ("543", "Ultra Very Light Beige Brown", "#F0DBC8"),
    ("550", "Very Dark Violet", "#5C184E"),
    ("552", "Medium Violet", "#803A8E"),
    ("553", "Violet", "#A3638F"),
    ("554", "Light Violet", "#DBB3CB"),
    ("561", "Very Dark Celadon Green", "#2C6A45"),
    ("562", "Medium Jade", "#53997A"),
    ("563", "Light Jade", "#8FC098"),
    ("564", "Very Light Jade", "#A7CDAF"),
    ("580", "Dark Moss Green", "#888D24"),
    ("581", "Moss Green", "#A7AE38"),
    ("597", "Turquoise", "#6CB5BD"),
    ("598", "Light Turquoise", "#9FCECE"),
    ("600", "Very Dark Cranberry", "#CD2F63"),
    ("601", "Dark Cranberry", "#D1286A"),
    ("602", "Medium Cranberry", "#E24874"),
    ("603", "Cranberry", "#E55C8C"),
    ("604", "Light Cranberry", "#EB9CB4"),
    ("605", "Very Light Cranberry", "#FFC0CD"),
    ("606", "Bright Orange-Red", "#FA3F1B"),
    ("608", "Bright Orange", "#FF6F30"),
    ("610", "Dark Drab Brown", "#796047"),
    ("611", "Drab Brown", "#96795C"),
    ("612", "Light Drab Brown", "#BCA37C"),
    ("613", "Very Light Drab Brown", "#DCC4A9"),
    ("632", "Ultra Very Dark Desert Sand", "#875539"),
    ("640", "Very Dark Beige Gray", "#9B8F7E"),
    ("642", "Dark Beige Gray", "#C2B9A6"),
    ("644", "Medium Beige Gray", "#D9D3C3"),
    ("645", "Very Dark Beaver Gray", "#6C7670"),
    ("646", "Dark Beaver Gray", "#8D9691"),
    ("647", "Medium Beaver Gray", "#A9B0A8"),
    ("648", "Light Beaver Gray", "#BCC3BB"),
    ("666", "Bright Red", "#EC2130"),
    ("676", "Light Old Gold", "#ECBB5C"),
    ("677", "Very Light Old Gold", "#F5ECCB"),
    ("680", "Dark Old Gold", "#B98C27"),
    ("699", "Green", "#136C00"),
    ("700", "Bright Green", "#2E7D09"),
    ("701", "Light Green", "#5D9F00"),
    ("702", "Kelly Green", "#86B500"),
    ("703", "Chartreuse", "#A6D700"),
    ("704", "Bright Chartreuse", "#CCF500"),
    ("712", "Cream", "#FFFBEF"),
    ("718", "Plum", "#9C2462"),
    ("720", "Dark Orange Spice", "#E94A07"),
    ("721", "Medium Orange Spice", "#F25D3D"),
    ("722", "Light Orange Spice", "#F6A667"),
    ("725", "Topaz", "#FFC723"),
    ("726", "Light Topaz", "#FFD747"),
    ("727", "Very Light Topaz", "#FFF785"),
    ("729", "Medium Old Gold", "#D1A140"),
    ("730", "Very Dark Olive Green", "#827B30"),
    ("731", "Dark Olive Green", "#938B37"),
    ("732", "Olive Green", "#948C3D"),
    ("733", "Medium Olive Green", "#BCB344"),
    ("734", "Light Olive Green", "#C7BD68"),
    ("738", "Very Light Tan", "#EBCBA1"),
    ("739", "Ultra Very Light Tan", "#F5EDD3"),
    ("740", "Tangerine", "#FF8B00"),
    ("741", "Medium Tangerine", "#FFA32B"),
    ("742", "Light Tangerine", "#FFBF57"),
    ("743", "Medium Yellow", "#FED376"),
    ("744", "Pale Yellow", "#FFE793"),
    ("745", "Light Pale Yellow", "#FFE9AD"),
    ("746", "Off White", "#FCF6E0"),
    ("747", "Very Light Sky Blue", "#E5FCFD"),
    ("754", "Light Peach", "#F9CEB9"),
    ("758", "Very Light Terra Cotta", "#EEAA9B"),
    ("760", "Salmon", "#F5BEC2"),
    ("761", "Light Salmon", "#FFD1CF"),
    ("762", "Very Light Pearl Gray", "#E6E6E6"),
    ("772", "Very Light Yellow Green", "#E4F3CC"),
    ("775", "Very Light Baby Blue", "#D9EBF1"),
    ("776", "Medium Pink", "#FCB0B9"),
    ("777", "Very Dark Raspberry", "#913546"),
    ("778", "Very Light Antique Mauve", "#DFB3BB"),
    ("779", "Dark Cocoa", "#624C43"),
    ("780", "Ultra Very Dark Topaz", "#8C5400"),
    ("781", "Very Dark Topaz", "#985F00"),
    ("782", "Dark Topaz", "#CB7800"),
    ("783", "Medium Topaz", "#D68700"),
    ("791", "Very Dark Cornflower Blue", "#464563"),
    ("792", "Dark Cornflower Blue", "#555B7B"),
    ("793", "Medium Cornflower Blue", "#707DA2"),
    ("794", "Light Cornflower Blue", "#8F9CC1"),
    ("796", "Dark Royal Blue", "#123071"),
    ("797", "Royal Blue", "#13438D"),
    ("798", "Dark Delft Blue", "#5174A0"),
    ("799", "Medium Delft Blue", "#7393B7"),
    ("800", "Pale Delft Blue", "#C9E4F2"),
    ("801", "Dark Coffee Brown", "#693F17"),
    ("803", "Ultra Very Dark Baby Blue", "#2C3E66"),
    ("806", "Dark Peacock Blue", "#3D95A5"),
    ("807", "Peacock Blue", "#64ABBA"),
    ("809", "Delft Blue", "#94B7D5"),
    ("813", "Light Blue", "#A1C2D7"),
    ("814", "Dark Garnet", "#6D1329"),
    ("815", "Medium Garnet", "#7C1D2B"),
    ("816", "Garnet", "#91182E"),
    ("817", "Very Dark Coral Red", "#BA1730"),
    ("818", "Baby Pink", "#FFD9DB"),
    ("819", "Light Baby Pink", "#FFEEEB"),
    ("820", "Very Dark Royal Blue", "#0E2456"),
    ("822", "Light Beige Gray", "#E7DECC"),
    ("823", "Dark Navy Blue", "#13294B"),
    ("824", "Very Dark Blue", "#396987"),
    ("825", "Dark Blue", "#4781A5"),
    ("826", "Medium Blue", "#6B9EBF"),
    ("827", "Very Light Blue", "#BDDDED"),
    ("828", "Ultra Very Light Blue", "#C5E8ED"),
    ("829", "Very Dark Golden Olive", "#7E6B42"),
    ("830", "Dark Golden Olive", "#8D784B"),
    ("831", "Medium Golden Olive", "#AA8F56"),
    ("832", "Golden Olive", "#BD9B51"),
    ("833", "Light Golden Olive", "#C8AB6C"),
    ("834", "Very Light Golden Olive", "#DBBE7F"),
    ("838", "Very Dark Beige Brown", "#59453A"),
    ("839", "Dark Beige Brown", "#67553F"),
    ("840", "Medium Beige Brown", "#9A7C5C"),
    ("841", "Light Beige Brown", "#B69B7E"),
    ("842", "Very Light Beige Brown", "#D1BAA1"),
    ("844", "Ultra Dark Beaver Gray", "#484848"),
    ("869", "Very Dark Hazelnut Brown", "#835E39"),
    ("890", "Ultra Very Dark Pistachio Green", "#174923"),
    ("891", "Dark Carnation", "#FF5773"),
    ("892", "Medium Carnation", "#FF798C"),
    ("893", "Light Carnation", "#FC90A2"),
    ("894", "Very Light Carnation", "#FFB2BB"),
    ("895", "Very Dark Hunter Green", "#1B5300"),
    ("898", "Very Dark Coffee Brown", "#5C3A1F"),
    ("899", "Medium Rose", "#F27688"),
    ("900", "Dark Burnt Orange", "#D15807"),
    ("902", "Very Dark Garnet", "#822637"),
    ("904", "Very Dark Parrot Green", "#4B7800"),
    ("905", "Dark Parrot Green", "#6F9800"),
    ("906", "Medium Parrot Green", "#9DB700"),
    ("907", "Light Parrot Green", "#D0F200"),
    ("909", "Very Dark Emerald Green", "#156F49"),
    ("910", "Dark Emerald Green", "#187E56"),
    ("911", "Medium Emerald Green", "#18966D"),
    ("912", "Light Emerald Green", "#27B48F"),
    ("913", "Medium Nile Green", "#6FBE92"),
    ("915", "Dark Plum", "#820043"),
    ("917", "Medium Plum", "#9B1359"),
    ("918", "Dark Red Copper", "#82340A"),
    ("919", "Red Copper", "#A64510"),
    ("920", "Medium Copper", "#AC5414"),
    ("921", "Copper", "#C66218"),
    ("922", "Light Copper", "#E27323"),
    ("924", "Very Dark Gray Green", "#566A6A"),
    ("926", "Medium Gray Green", "#98B3A6"),
    ("927", "Light Gray Green", "#BFCEC4"),
    ("928", "Very Light Gray Green", "#E7EDE7"),
    ("930", "Dark Antique Blue", "#455C71"),
    ("931", "Medium Antique Blue", "#6A8397"),
    ("932", "Light Antique Blue", "#A2B5C6"),
    ("934", "Black Avocado Green", "#313919"),
    ("935", "Dark Avocado Green", "#424D21"),
    ("936", "Very Dark Avocado Green", "#4C5826"),
    ("937", "Medium Avocado Green", "#627133"),
    ("938", "Ultra Dark Coffee Brown", "#4A2812"),
    ("939", "Very Dark Navy Blue", "#13213C"),
    ("943", "Medium Bright Green", "#2D9687"),
    ("945", "Tawny", "#F6C199"),
    ("946", "Medium Burnt Orange", "#EB6307"),
    ("947", "Burnt Orange", "#FF5F01"),
    ("948", "Very Light Peach", "#FED9C7"),
    ("950", "Light Desert Sand", "#EED3C4"),
    ("951", "Light Tawny", "#FFE2CF"),
    ("954", "Nile Green", "#88D0A2"),
    ("955", "Light Nile Green", "#A2D6AD"),
    ("956", "Geranium", "#FF9191"),
    ("957", "Pale Geranium", "#FDB5B5"),
    ("958", "Dark Seagreen", "#52B5A3"),
    ("959", "Medium Seagreen", "#89C9BC"),
    ("961", "Dark Dusty Rose", "#CE486E"),
    ("962", "Medium Dusty Rose", "#E97D8B"),
    ("963", "Ultra Very Light Dusty Rose", "#FFCCD1"),
    ("964", "Light Seagreen", "#C1E2DC"),
    ("966", "Medium Baby Green", "#B9D7C0"),
    ("967", "Very Light Apricot", "#FFDED5"),
    ("970", "Light Pumpkin", "#FF901F"),
    ("971", "Pumpkin", "#FF8600"),
    ("972", "Deep Canary", "#FFB900"),
    ("973", "Bright Canary", "#FFE529"),
    ("975", "Dark Golden Brown", "#914F12"),
    ("976", "Medium Golden Brown", "#C28142"),
    ("977", "Light Golden Brown", "#DC9C56"),
    ("986", "Very Dark Forest Green", "#466B28"),
    ("987", "Dark Forest Green", "#5F7D2D"),
    ("988", "Medium Forest Green", "#77923C"),
    ("989", "Forest Green", "#88A84C"),
    ("991", "Dark Aquamarine", "#477B6E"),
    ("992", "Light Aquamarine", "#6FAE9F"),
    ("993", "Very Light Aquamarine", "#90C0B4"),
    ("995", "Dark Electric Blue", "#2696B6"),
    ("996", "Medium Electric Blue", "#30C2EC"),
    ("3011", "Dark Khaki Green", "#898A58"),
    ("3012", "Medium Khaki Green", "#A6A75D"),
    ("3013", "Light Khaki Green", "#B9B982"),
    ("3021", "Very Dark Brown Gray", "#5B4733"),
    ("3022", "Medium Brown Gray", "#8E9078"),
    ("3023", "Light Brown Gray", "#B5A588"),
    ("3024", "Very Light Brown Gray", "#D0CCBE"),
    ("3031", "Very Dark Mocha Brown", "#54372A"),
    ("3032", "Medium Mocha Brown", "#B39F8B"),
    ("3033", "Very Light Mocha Brown", "#E3D8C8"),
    ("3041", "Medium Antique Violet", "#C6A9C1"),
    ("3042", "Light Antique Violet", "#D7BFD4"),
    ("3045", "Dark Yellow Beige", "#BC966A"),
    ("3046", "Medium Yellow Beige", "#D8BC9A"),
    ("3047", "Light Yellow Beige", "#E7D6BC"),
    ("3051", "Dark Green Gray", "#5F6648"),
    ("3052", "Medium Green Gray", "#889268"),
    ("3053", "Green Gray", "#9CA482"),
    ("3064", "Desert Sand", "#C48E70"),
    ("3072", "Very Light Beaver Gray", "#E1E5DE"),
    ("3078", "Very Light Golden Yellow", "#FFF8DC"),
    ("3325", "Light Baby Blue", "#BFD8EB"),
    ("3326", "Light Rose", "#FBADB4"),
    ("3328", "Dark Salmon", "#E07681"),
    ("3340", "Medium Apricot", "#FF8262"),
    ("3341", "Apricot", "#FFAB8A"),
    ("3345", "Dark Hunter Green", "#66834A"),
    ("3346", "Hunter Green", "#77A058"),
    ("3347", "Medium Yellow Green", "#A3C85E"),
    ("3348", "Light Yellow Green", "#D8E79E"),
    ("3350", "Ultra Dark Dusty Rose", "#B52D5C"),
    ("3354", "Light Dusty Rose", "#D887A6"),
    ("3362", "Dark Pine Green", "#5E6B47"),
    ("3363", "Medium Pine Green", "#728256"),
    ("3364", "Pine Green", "#546E4D"),
    ("3371", "Black Brown", "#301904"),
    ("3607", "Light Plum", "#C54989"),
    ("3608", "Very Light Plum", "#EA9CC4"),
    ("3609", "Ultra Light Plum", "#F4BBDE"),
    ("3685", "Very Dark Mauve", "#881155"),
    ("3687", "Mauve", "#C96B82"),
    ("3688", "Medium Mauve", "#E7A6B5"),
    ("3689", "Light Mauve", "#FBBFC2"),
    ("3705", "Dark Melon", "#FF7992"),
    ("3706", "Medium Melon", "#FFADBC"),
    ("3708", "Light Melon", "#FFCBD5"),
    ("3712", "Medium Salmon", "#EA9CA3"),
    ("3713", "Very Light Salmon", "#FFE2E2"),
    ("3716", "Very Light Dusty Rose", "#FFBAC7"),
    ("3721", "Dark Shell Pink", "#9F4F53"),
    ("3722", "Medium Shell Pink", "#BC6A72"),
    ("3726", "Dark Antique Mauve", "#9B6A75"),
    ("3727", "Light Antique Mauve", "#DBA9B2"),
    ("3731", "Very Dark Dusty Rose", "#C0476C"),
    ("3733", "Dusty Rose", "#CD5E8D"),
    ("3740", "Dark Antique Violet", "#A17896"),
    ("3743", "Very Light Antique Violet", "#E3D7E2"),
    ("3746", "Dark Blue Violet", "#948FCC"),
    ("3747", "Very Light Blue Violet", "#E3E5EC"),
    ("3750", "Very Dark Antique Blue", "#384C5E"),
    ("3752", "Very Light Antique Blue", "#C7D7E0"),
    ("3753", "Ultra Very Light Antique Blue", "#DBE6EE"),
    ("3755", "Baby Blue", "#8DADD3"),
    ("3756", "Ultra Very Light Baby Blue", "#EEFCFC"),
    ("3760", "Medium Wedgewood", "#3E85A0"),
    ("3761", "Light Sky Blue", "#ACD8E2"),
    ("3765", "Very Dark Peacock Blue", "#347F8C"),
    ("3766", "Light Peacock Blue", "#82B9C4"),
    ("3768", "Dark Gray Green", "#5B7B6B"),
    ("3770", "Very Light Tawny", "#FFEEE3"),
    ("3771", "Ultra Very Light Terra Cotta", "#F4BBA9"),
    ("3772", "Very Dark Desert Sand", "#A06C50"),
    ("3773", "Dark Desert Sand", "#B67F63"),
    ("3774", "Very Light Desert Sand", "#F7DFD0"),
    ("3776", "Light Mahogany", "#CF7939"),
    ("3777", "Very Dark Terra Cotta", "#8E3031"),
    ("3778", "Light Terra Cotta", "#DD967F"),
    ("3779", "Ultra Very Light Terra Cotta", "#F8CAC8"),
    ("3781", "Dark Mocha Brown", "#6B5743"),
    ("3782", "Light Mocha Brown", "#D2BCA6"),
    ("3787", "Dark Brown Gray", "#6B675E"),
    ("3790", "Ultra Dark Beige Gray", "#7F6A55"),
    ("3799", "Very Dark Pewter Gray", "#5B5F5F"),
    ("3801", "Very Dark Melon", "#E74967"),
    ("3802", "Very Dark Antique Mauve", "#714149"),
    ("3803", "Dark Mauve", "#AB3357"),
    ("3804", "Dark Cyclamen Pink", "#E02876"),
    ("3805", "Cyclamen Pink", "#F3478B"),
    ("3806", "Light Cyclamen Pink", "#FF8CAE"),
    ("3807", "Cornflower Blue", "#60678C"),
    ("3808", "Ultra Very Dark Turquoise", "#366970"),
    ("3809", "Very Dark Turquoise", "#328082"),
    ("3810", "Dark Turquoise", "#4D999A"),
    ("3811", "Very Light Turquoise", "#C2E3DF"),
    ("3812", "Very Dark Seagreen", "#2E917F"),
    ("3813", "Light Blue Green", "#B2D4BD"),
    ("3814", "Aquamarine", "#508B7D"),
    ("3815", "Dark Celadon Green", "#477759"),
    ("3816", "Celadon Green", "#7BAB8E"),
    ("3817", "Light Celadon Green", "#99C3AA"),
    ("3818", "Ultra Very Dark Emerald Green", "#115A3B"),
    ("3819", "Light Moss Green", "#E0E868"),
    ("3820", "Dark Straw", "#DDB900"),
    ("3821", "Straw", "#E0C47A"),
    ("3822", "Light Straw", "#F0DE9C"),
    ("3823", "Ultra Pale Yellow", "#FFFDE3"),
    ("3824", "Light Apricot", "#FECABE"),
    ("3825", "Pale Pumpkin", "#FDBD96"),
    ("3826", "Golden Brown", "#AD7239"),
    ("3827", "Pale Golden Brown", "#F7BB77"),
    ("3828", "Hazelnut Brown", "#B78B61"),
    ("3829", "Very Dark Old Gold", "#9F6F00"),
    ("3830", "Terra Cotta", "#B85A41"),
    ("3831", "Dark Raspberry", "#B0194B"),
    ("3832", "Medium Raspberry", "#D13D6F"),
    ("3833", "Light Raspberry", "#E95077"),
    ("3834", "Dark Grape", "#742A6E"),
    ("3835", "Medium Grape", "#924C8F"),
    ("3836", "Light Grape", "#B78BC0"),
    ("3837", "Ultra Dark Lavender", "#6D417E"),
    ("3838", "Dark Lavender Blue", "#3A75AE"),
    ("3839", "Medium Lavender Blue", "#6495C8"),
    ("3840", "Light Lavender Blue", "#A8C9E8"),
    ("3841", "Pale Baby Blue", "#CEDEED"),
    ("3842", "Very Dark Wedgewood", "#32667C"),
    ("3843", "Electric Blue", "#14AAD0"),
    ("3844", "Dark Bright Turquoise", "#12B5C4"),
    ("3845", "Medium Bright Turquoise", "#04C4CA"),
    ("3846", "Light Bright Turquoise", "#06E3E6"),
    ("3847", "Dark Teal Green", "#347D75"),
    ("3848", "Medium Teal Green", "#559392"),
    ("3849", "Light Teal Green", "#52B3A4"),
    ("3850", "Dark Bright Green", "#378477"),
    ("3851", "Light Bright Green", "#49B3A1"),
    ("3852", "Very Dark Straw", "#CD9E17"),
    ("3853", "Dark Autumn Gold", "#F59B5A"),
    ("3854", "Medium Autumn Gold", "#F68A5C"),
    ("3855", "Light Autumn Gold", "#FBBF99"),
    ("3856", "Ultra Very Light Mahogany", "#FFD3B5"),
    ("3857", "Dark Rosewood", "#68251A"),
    ("3858", "Medium Rosewood", "#964A38"),
    ("3859", "Light Rosewood", "#BA8B7C"),
    ("3860", "Cocoa", "#78503B"),
    ("3861", "Light Cocoa", "#A07959"),
    ("3862", "Dark Mocha Beige", "#856551"),
    ("3863", "Medium Mocha Beige", "#A4826A"),
    ("3864", "Light Mocha Beige", "#C9A992"),
    ("3865", "Winter White", "#FAF9F4"),
    ("3866", "Ultra Very Light Mocha Brown", "#FAF6F0"),
];

/// Cached catalog with precomputed LAB values
struct Catalog {
    threads: Vec<ThreadColor>,
    labs: Vec<Lab<D65, f32>>,
}

static CACHED_CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    fn global() -> &'static Self {
        CACHED_CATALOG.get_or_init(Self::new)
    }

    fn new() -> Self {
        let threads: Vec<ThreadColor> = DMC_CATALOG
            .iter()
            .map(|(dmc, name, hex)| ThreadColor {
                dmc: dmc.to_string(),
                name: name.to_string(),
                hex: hex.to_string(),
            })
            .collect();

        let labs: Vec<Lab<D65, f32>> = DMC_CATALOG
            .iter()
            .map(|(_, _, hex)| rgb_to_lab(hex_to_rgb(hex)))
            .collect();

        Self { threads, labs }
    }

    /// Find the closest catalog color using CIEDE2000 Delta-E.
    ///
    /// The scan is sequential with a strict `<` comparison, so equidistant
    /// entries resolve to the first one in catalog order. Imports depend on
    /// this for reproducible palette assignment.
    fn find_closest(&self, target: Lab<D65, f32>) -> &ThreadColor {
        let mut best_idx = 0;
        let mut best_dist = f32::INFINITY;
        for (i, lab) in self.labs.iter().enumerate() {
            let dist = target.difference(*lab);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        &self.threads[best_idx]
    }
}

/// All catalog entries, in catalog order.
pub fn all() -> &'static [ThreadColor] {
    &Catalog::global().threads
}

/// Look up a catalog entry by its DMC code.
pub fn by_code(dmc: &str) -> Option<&'static ThreadColor> {
    Catalog::global().threads.iter().find(|t| t.dmc == dmc)
}

/// Map an RGB color to the closest catalog entry.
pub fn closest(rgb: [u8; 3]) -> &'static ThreadColor {
    Catalog::global().find_closest(rgb_to_lab(rgb))
}

/// Map a hex color string (`#RRGGBB` or `RRGGBB`) to the closest catalog entry.
pub fn closest_hex(hex: &str) -> Result<&'static ThreadColor, PatternError> {
    Ok(closest(parse_hex(hex)?))
}

/// Parse a hex color string, rejecting anything that is not 6 hex digits
/// with an optional leading `#`.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], PatternError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PatternError::InvalidColor {
            input: hex.to_string(),
        });
    }
    Ok(hex_to_rgb(digits))
}

/// Convert a known-good hex string to an RGB triplet.
/// Only used on the const catalog table and pre-validated input.
fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    [r, g, b]
}

/// Format an RGB triplet as an uppercase hex string.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Convert RGB [0-255] to LAB color space
fn rgb_to_lab(rgb: [u8; 3]) -> Lab<D65, f32> {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    Lab::from_color(srgb)
}
