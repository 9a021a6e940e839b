// Canonical ground-truth condition labels.
//
// Each entry is `(identifier, path)`. Identifiers are the upper-cased last path
// segment, qualified with the parent segment where two leaves share a name.
// Paths are matched verbatim.

pub(super) const LABELS: &[(&str, &str)] = &[
    ("CONDITION", "condition"),
    ("ACQUISITION", "condition/acquisition"),
    ("SOURCE_CHARACTERISTICS", "condition/acquisition/source-characteristics"),
    ("MEDIUM", "condition/acquisition/source-characteristics/medium"),
    ("PAPER", "condition/acquisition/source-characteristics/medium/paper"),
    ("COATED", "condition/acquisition/source-characteristics/medium/paper/coated"),
    ("UNCOATED", "condition/acquisition/source-characteristics/medium/paper/uncoated"),
    ("HANDMADE", "condition/acquisition/source-characteristics/medium/paper/handmade"),
    ("NEWSPRINT", "condition/acquisition/source-characteristics/medium/paper/newsprint"),
    ("CARDBOARD", "condition/acquisition/source-characteristics/medium/paper/cardboard"),
    ("LAID", "condition/acquisition/source-characteristics/medium/paper/laid"),
    ("WOVE", "condition/acquisition/source-characteristics/medium/paper/wove"),
    ("RECYCLED", "condition/acquisition/source-characteristics/medium/paper/recycled"),
    ("PARCHMENT", "condition/acquisition/source-characteristics/medium/parchment"),
    ("MICROFILM", "condition/acquisition/source-characteristics/medium/microfilm"),
    ("POSITIVE", "condition/acquisition/source-characteristics/medium/microfilm/positive"),
    ("NEGATIVE", "condition/acquisition/source-characteristics/medium/microfilm/negative"),
    ("MICROFICHE", "condition/acquisition/source-characteristics/medium/microfiche"),
    ("PHOTOGRAPHIC_PRINT", "condition/acquisition/source-characteristics/medium/photographic-print"),
    ("PALM_LEAF", "condition/acquisition/source-characteristics/medium/palm-leaf"),
    ("FORMAT", "condition/acquisition/source-characteristics/format"),
    ("FOLIO", "condition/acquisition/source-characteristics/format/folio"),
    ("QUARTO", "condition/acquisition/source-characteristics/format/quarto"),
    ("OCTAVO", "condition/acquisition/source-characteristics/format/octavo"),
    ("DUODECIMO", "condition/acquisition/source-characteristics/format/duodecimo"),
    ("BROADSHEET", "condition/acquisition/source-characteristics/format/broadsheet"),
    ("OBLONG", "condition/acquisition/source-characteristics/format/oblong"),
    ("MINIATURE", "condition/acquisition/source-characteristics/format/miniature"),
    ("BINDING", "condition/acquisition/source-characteristics/binding"),
    ("TIGHT_BINDING", "condition/acquisition/source-characteristics/binding/tight-binding"),
    ("SPINE_CURVATURE", "condition/acquisition/source-characteristics/binding/spine-curvature"),
    ("GUTTER_SHADOW", "condition/acquisition/source-characteristics/binding/gutter-shadow"),
    ("LOOSE_LEAVES", "condition/acquisition/source-characteristics/binding/loose-leaves"),
    ("SURFACE", "condition/acquisition/source-characteristics/surface"),
    ("GLOSSY", "condition/acquisition/source-characteristics/surface/glossy"),
    ("TRANSPARENT", "condition/acquisition/source-characteristics/surface/transparent"),
    ("SHOW_THROUGH", "condition/acquisition/source-characteristics/surface/transparent/show-through"),
    ("BLEED_THROUGH", "condition/acquisition/source-characteristics/surface/transparent/bleed-through"),
    ("TEXTURED", "condition/acquisition/source-characteristics/surface/textured"),
    ("FOLDED", "condition/acquisition/source-characteristics/surface/folded"),
    ("CRUMPLED", "condition/acquisition/source-characteristics/surface/crumpled"),
    ("CONDITION_AT_CAPTURE", "condition/acquisition/source-characteristics/condition-at-capture"),
    ("BOUND", "condition/acquisition/source-characteristics/condition-at-capture/bound"),
    ("DISBOUND", "condition/acquisition/source-characteristics/condition-at-capture/disbound"),
    ("CONSERVED", "condition/acquisition/source-characteristics/condition-at-capture/conserved"),
    ("UNDER_GLASS", "condition/acquisition/source-characteristics/condition-at-capture/under-glass"),
    ("METHOD_FLAWS", "condition/acquisition/method-flaws"),
    ("IMAGING", "condition/acquisition/method-flaws/imaging"),
    ("MISSING_CONTENT", "condition/acquisition/method-flaws/imaging/missing-content"),
    ("THRESHOLDING", "condition/acquisition/method-flaws/imaging/missing-content/thresholding"),
    ("CROPPING", "condition/acquisition/method-flaws/imaging/missing-content/cropping"),
    ("OVEREXPOSURE", "condition/acquisition/method-flaws/imaging/missing-content/overexposure"),
    ("UNDEREXPOSURE", "condition/acquisition/method-flaws/imaging/missing-content/underexposure"),
    ("MASKING", "condition/acquisition/method-flaws/imaging/missing-content/masking"),
    ("CUT_OFF_MARGIN", "condition/acquisition/method-flaws/imaging/missing-content/cut-off-margin"),
    ("GEOMETRY", "condition/acquisition/method-flaws/imaging/geometry"),
    ("SKEW", "condition/acquisition/method-flaws/imaging/geometry/skew"),
    ("ROTATION", "condition/acquisition/method-flaws/imaging/geometry/rotation"),
    ("WARPING", "condition/acquisition/method-flaws/imaging/geometry/warping"),
    ("PERSPECTIVE", "condition/acquisition/method-flaws/imaging/geometry/perspective"),
    ("KEYSTONE", "condition/acquisition/method-flaws/imaging/geometry/keystone"),
    ("CURL", "condition/acquisition/method-flaws/imaging/geometry/curl"),
    ("PAGE_CURL", "condition/acquisition/method-flaws/imaging/geometry/page-curl"),
    ("FOCUS", "condition/acquisition/method-flaws/imaging/focus"),
    ("BLUR", "condition/acquisition/method-flaws/imaging/focus/blur"),
    ("MOTION_BLUR", "condition/acquisition/method-flaws/imaging/focus/motion-blur"),
    ("OUT_OF_FOCUS_REGION", "condition/acquisition/method-flaws/imaging/focus/out-of-focus-region"),
    ("DEPTH_OF_FIELD", "condition/acquisition/method-flaws/imaging/focus/depth-of-field"),
    ("LIGHTING", "condition/acquisition/method-flaws/imaging/lighting"),
    ("UNEVEN", "condition/acquisition/method-flaws/imaging/lighting/uneven"),
    ("GLARE", "condition/acquisition/method-flaws/imaging/lighting/glare"),
    ("REFLECTION", "condition/acquisition/method-flaws/imaging/lighting/reflection"),
    ("SHADOW", "condition/acquisition/method-flaws/imaging/lighting/shadow"),
    ("COLOR_CAST", "condition/acquisition/method-flaws/imaging/lighting/color-cast"),
    ("LOW_CONTRAST", "condition/acquisition/method-flaws/imaging/lighting/low-contrast"),
    ("FLICKER", "condition/acquisition/method-flaws/imaging/lighting/flicker"),
    ("IMAGING_NOISE", "condition/acquisition/method-flaws/imaging/noise"),
    ("SALT_AND_PEPPER", "condition/acquisition/method-flaws/imaging/noise/salt-and-pepper"),
    ("JPEG_ARTIFACTS", "condition/acquisition/method-flaws/imaging/noise/jpeg-artifacts"),
    ("MOIRE", "condition/acquisition/method-flaws/imaging/noise/moire"),
    ("BANDING", "condition/acquisition/method-flaws/imaging/noise/banding"),
    ("STREAKS", "condition/acquisition/method-flaws/imaging/noise/streaks"),
    ("GRAIN", "condition/acquisition/method-flaws/imaging/noise/grain"),
    ("SPECKLES", "condition/acquisition/method-flaws/imaging/noise/speckles"),
    ("HALFTONE", "condition/acquisition/method-flaws/imaging/noise/halftone"),
    ("RESOLUTION", "condition/acquisition/method-flaws/imaging/resolution"),
    ("TOO_LOW", "condition/acquisition/method-flaws/imaging/resolution/too-low"),
    ("INTERPOLATED", "condition/acquisition/method-flaws/imaging/resolution/interpolated"),
    ("INCONSISTENT", "condition/acquisition/method-flaws/imaging/resolution/inconsistent"),
    ("COLOR", "condition/acquisition/method-flaws/imaging/color"),
    ("GRAYSCALE_CONVERSION", "condition/acquisition/method-flaws/imaging/color/grayscale-conversion"),
    ("BITONAL", "condition/acquisition/method-flaws/imaging/color/bitonal"),
    ("WRONG_PROFILE", "condition/acquisition/method-flaws/imaging/color/wrong-profile"),
    ("CHANNEL_SHIFT", "condition/acquisition/method-flaws/imaging/color/channel-shift"),
    ("FOREIGN_OBJECTS", "condition/acquisition/method-flaws/imaging/foreign-objects"),
    ("FINGERS", "condition/acquisition/method-flaws/imaging/foreign-objects/fingers"),
    ("CLAMPS", "condition/acquisition/method-flaws/imaging/foreign-objects/clamps"),
    ("WEIGHTS", "condition/acquisition/method-flaws/imaging/foreign-objects/weights"),
    ("RULER", "condition/acquisition/method-flaws/imaging/foreign-objects/ruler"),
    ("COLOR_CHART", "condition/acquisition/method-flaws/imaging/foreign-objects/color-chart"),
    ("DUST", "condition/acquisition/method-flaws/imaging/foreign-objects/dust"),
    ("DOUBLE_PAGE", "condition/acquisition/method-flaws/imaging/double-page"),
    ("SPLIT_WRONG", "condition/acquisition/method-flaws/imaging/double-page/split-wrong"),
    ("SPREAD_CAPTURED", "condition/acquisition/method-flaws/imaging/double-page/spread-captured"),
    ("NEIGHBOUR_PAGE_VISIBLE", "condition/acquisition/method-flaws/imaging/double-page/neighbour-page-visible"),
    ("FILE_FORMAT", "condition/acquisition/method-flaws/imaging/file-format"),
    ("LOSSY_COMPRESSION", "condition/acquisition/method-flaws/imaging/file-format/lossy-compression"),
    ("WRONG_BIT_DEPTH", "condition/acquisition/method-flaws/imaging/file-format/wrong-bit-depth"),
    ("TRUNCATED_FILE", "condition/acquisition/method-flaws/imaging/file-format/truncated-file"),
    ("WRONG_CONTAINER", "condition/acquisition/method-flaws/imaging/file-format/wrong-container"),
    ("MISSING_METADATA", "condition/acquisition/method-flaws/imaging/file-format/missing-metadata"),
    ("CALIBRATION", "condition/acquisition/method-flaws/imaging/calibration"),
    ("MISSING_TARGET", "condition/acquisition/method-flaws/imaging/calibration/missing-target"),
    ("WRONG_WHITE_BALANCE", "condition/acquisition/method-flaws/imaging/calibration/wrong-white-balance"),
    ("GAMMA", "condition/acquisition/method-flaws/imaging/calibration/gamma"),
    ("MICROFILM_CONVERSION", "condition/acquisition/method-flaws/microfilm-conversion"),
    ("SCRATCHES", "condition/acquisition/method-flaws/microfilm-conversion/scratches"),
    ("DENSITY_VARIATION", "condition/acquisition/method-flaws/microfilm-conversion/density-variation"),
    ("FRAME_MISALIGNMENT", "condition/acquisition/method-flaws/microfilm-conversion/frame-misalignment"),
    ("GENERATION_LOSS", "condition/acquisition/method-flaws/microfilm-conversion/generation-loss"),
    ("POST_PROCESSING", "condition/acquisition/method-flaws/post-processing"),
    ("OVER_SHARPENING", "condition/acquisition/method-flaws/post-processing/over-sharpening"),
    ("DESPECKLE_DAMAGE", "condition/acquisition/method-flaws/post-processing/despeckle-damage"),
    ("DEWARPING_ARTIFACTS", "condition/acquisition/method-flaws/post-processing/dewarping-artifacts"),
    ("BINARIZATION_ARTIFACTS", "condition/acquisition/method-flaws/post-processing/binarization-artifacts"),
    ("METADATA", "condition/acquisition/method-flaws/metadata"),
    ("WRONG_ORDER", "condition/acquisition/method-flaws/metadata/wrong-order"),
    ("MISSING_PAGES", "condition/acquisition/method-flaws/metadata/missing-pages"),
    ("DUPLICATE_PAGES", "condition/acquisition/method-flaws/metadata/duplicate-pages"),
    ("WRONG_PAGE_NUMBER", "condition/acquisition/method-flaws/metadata/wrong-page-number"),
    ("AUTOMATION", "condition/acquisition/method-flaws/automation"),
    ("PRODUCTION_RELATED", "condition/production-related"),
    ("TYPESETTING", "condition/production-related/typesetting"),
    ("SCRIPT", "condition/production-related/typesetting/script"),
    ("FRAKTUR", "condition/production-related/typesetting/script/fraktur"),
    ("ANTIQUA", "condition/production-related/typesetting/script/antiqua"),
    ("SCHWABACHER", "condition/production-related/typesetting/script/schwabacher"),
    ("TEXTURA", "condition/production-related/typesetting/script/textura"),
    ("ROTUNDA", "condition/production-related/typesetting/script/rotunda"),
    ("ITALIC", "condition/production-related/typesetting/script/italic"),
    ("SCRIPT_GREEK", "condition/production-related/typesetting/script/greek"),
    ("SCRIPT_HEBREW", "condition/production-related/typesetting/script/hebrew"),
    ("CYRILLIC", "condition/production-related/typesetting/script/cyrillic"),
    ("MIXED", "condition/production-related/typesetting/script/mixed"),
    ("LAYOUT", "condition/production-related/typesetting/layout"),
    ("MULTI_COLUMN", "condition/production-related/typesetting/layout/multi-column"),
    ("LAYOUT_MARGINALIA", "condition/production-related/typesetting/layout/marginalia"),
    ("FOOTNOTES", "condition/production-related/typesetting/layout/footnotes"),
    ("RUNNING_TITLES", "condition/production-related/typesetting/layout/running-titles"),
    ("CATCHWORDS", "condition/production-related/typesetting/layout/catchwords"),
    ("SIGNATURES", "condition/production-related/typesetting/layout/signatures"),
    ("TABLES", "condition/production-related/typesetting/layout/tables"),
    ("IRREGULAR_LINE_SPACING", "condition/production-related/typesetting/layout/irregular-line-spacing"),
    ("TYPOGRAPHY", "condition/production-related/typesetting/typography"),
    ("LIGATURES", "condition/production-related/typesetting/typography/ligatures"),
    ("LONG_S", "condition/production-related/typesetting/typography/long-s"),
    ("ABBREVIATIONS", "condition/production-related/typesetting/typography/abbreviations"),
    ("SUPERSCRIPT", "condition/production-related/typesetting/typography/superscript"),
    ("SUBSCRIPT", "condition/production-related/typesetting/typography/subscript"),
    ("SPECIAL_CHARACTERS", "condition/production-related/typesetting/typography/special-characters"),
    ("SPACED_TEXT", "condition/production-related/typesetting/typography/spaced-text"),
    ("DROP_CAPITALS", "condition/production-related/typesetting/typography/drop-capitals"),
    ("FONT_SIZE", "condition/production-related/typesetting/font-size"),
    ("VERY_SMALL", "condition/production-related/typesetting/font-size/very-small"),
    ("VERY_LARGE", "condition/production-related/typesetting/font-size/very-large"),
    ("MIXED_SIZES", "condition/production-related/typesetting/font-size/mixed-sizes"),
    ("LANGUAGE", "condition/production-related/typesetting/language"),
    ("LATIN", "condition/production-related/typesetting/language/latin"),
    ("GERMAN", "condition/production-related/typesetting/language/german"),
    ("FRENCH", "condition/production-related/typesetting/language/french"),
    ("ENGLISH", "condition/production-related/typesetting/language/english"),
    ("DUTCH", "condition/production-related/typesetting/language/dutch"),
    ("ITALIAN", "condition/production-related/typesetting/language/italian"),
    ("LANGUAGE_GREEK", "condition/production-related/typesetting/language/greek"),
    ("LANGUAGE_HEBREW", "condition/production-related/typesetting/language/hebrew"),
    ("MIXED_LANGUAGES", "condition/production-related/typesetting/language/mixed-languages"),
    ("DIALECT", "condition/production-related/typesetting/language/dialect"),
    ("STRUCTURE", "condition/production-related/typesetting/structure"),
    ("TITLE_PAGE", "condition/production-related/typesetting/structure/title-page"),
    ("COLOPHON", "condition/production-related/typesetting/structure/colophon"),
    ("INDEX", "condition/production-related/typesetting/structure/index"),
    ("TABLE_OF_CONTENTS", "condition/production-related/typesetting/structure/table-of-contents"),
    ("ERRATA", "condition/production-related/typesetting/structure/errata"),
    ("DEDICATION", "condition/production-related/typesetting/structure/dedication"),
    ("PREFACE", "condition/production-related/typesetting/structure/preface"),
    ("CHAPTER_HEADING", "condition/production-related/typesetting/structure/chapter-heading"),
    ("POETRY", "condition/production-related/typesetting/structure/poetry"),
    ("DRAMA", "condition/production-related/typesetting/structure/drama"),
    ("LETTER", "condition/production-related/typesetting/structure/letter"),
    ("ADVERTISEMENT", "condition/production-related/typesetting/structure/advertisement"),
    ("PRINTING", "condition/production-related/printing"),
    ("INK", "condition/production-related/printing/ink"),
    ("FADED", "condition/production-related/printing/ink/faded"),
    ("SMUDGED", "condition/production-related/printing/ink/smudged"),
    ("UNEVEN_INKING", "condition/production-related/printing/ink/uneven-inking"),
    ("OVERINKED", "condition/production-related/printing/ink/overinked"),
    ("OFFSET", "condition/production-related/printing/ink/offset"),
    ("BLEEDING", "condition/production-related/printing/ink/bleeding"),
    ("RED_INK", "condition/production-related/printing/ink/red-ink"),
    ("GOLD_LEAF", "condition/production-related/printing/ink/gold-leaf"),
    ("IMPRESSION", "condition/production-related/printing/impression"),
    ("WEAK", "condition/production-related/printing/impression/weak"),
    ("HEAVY", "condition/production-related/printing/impression/heavy"),
    ("DOUBLED", "condition/production-related/printing/impression/doubled"),
    ("SLURRED", "condition/production-related/printing/impression/slurred"),
    ("TYPE_DAMAGE", "condition/production-related/printing/type-damage"),
    ("BROKEN_CHARACTERS", "condition/production-related/printing/type-damage/broken-characters"),
    ("WORN_TYPE", "condition/production-related/printing/type-damage/worn-type"),
    ("MISALIGNED_TYPE", "condition/production-related/printing/type-damage/misaligned-type"),
    ("INVERTED_CHARACTERS", "condition/production-related/printing/type-damage/inverted-characters"),
    ("REGISTRATION", "condition/production-related/printing/registration"),
    ("MISREGISTRATION", "condition/production-related/printing/registration/misregistration"),
    ("COLOR_OFFSET", "condition/production-related/printing/registration/color-offset"),
    ("PAPER_DEFECTS", "condition/production-related/printing/paper-defects"),
    ("WRINKLES", "condition/production-related/printing/paper-defects/wrinkles"),
    ("INCLUSIONS", "condition/production-related/printing/paper-defects/inclusions"),
    ("THIN_SPOTS", "condition/production-related/printing/paper-defects/thin-spots"),
    ("UNEVEN_TEXTURE", "condition/production-related/printing/paper-defects/uneven-texture"),
    ("HANDWRITING", "condition/production-related/handwriting"),
    ("ANNOTATIONS", "condition/production-related/handwriting/annotations"),
    ("INTERLINEAR", "condition/production-related/handwriting/annotations/interlinear"),
    ("MARGINAL", "condition/production-related/handwriting/annotations/marginal"),
    ("UNDERLINING", "condition/production-related/handwriting/annotations/underlining"),
    ("STRIKE_THROUGH", "condition/production-related/handwriting/annotations/strike-through"),
    ("MANUSCRIPT", "condition/production-related/handwriting/manuscript"),
    ("CURSIVE", "condition/production-related/handwriting/manuscript/cursive"),
    ("BOOK_HAND", "condition/production-related/handwriting/manuscript/book-hand"),
    ("MULTIPLE_HANDS", "condition/production-related/handwriting/manuscript/multiple-hands"),
    ("FADED_INK", "condition/production-related/handwriting/manuscript/faded-ink"),
    ("PENCIL", "condition/production-related/handwriting/manuscript/pencil"),
    ("ERASURES", "condition/production-related/handwriting/manuscript/erasures"),
    ("DECORATION", "condition/production-related/decoration"),
    ("ILLUSTRATIONS", "condition/production-related/decoration/illustrations"),
    ("ORNAMENTS", "condition/production-related/decoration/ornaments"),
    ("INITIALS", "condition/production-related/decoration/initials"),
    ("BORDERS", "condition/production-related/decoration/borders"),
    ("WOODCUTS", "condition/production-related/decoration/woodcuts"),
    ("ENGRAVINGS", "condition/production-related/decoration/engravings"),
    ("VIGNETTES", "condition/production-related/decoration/vignettes"),
    ("PRINTER_MARKS", "condition/production-related/decoration/printer-marks"),
    ("PRESERVATION", "condition/preservation"),
    ("PHYSICAL_DAMAGE", "condition/preservation/physical-damage"),
    ("TEARS", "condition/preservation/physical-damage/tears"),
    ("EDGE", "condition/preservation/physical-damage/tears/edge"),
    ("TEARS_TEXT_AREA", "condition/preservation/physical-damage/tears/text-area"),
    ("HOLES", "condition/preservation/physical-damage/holes"),
    ("WORMHOLES", "condition/preservation/physical-damage/holes/wormholes"),
    ("PUNCH_HOLES", "condition/preservation/physical-damage/holes/punch-holes"),
    ("BURN_HOLES", "condition/preservation/physical-damage/holes/burn-holes"),
    ("MISSING_PARTS", "condition/preservation/physical-damage/missing-parts"),
    ("CORNER", "condition/preservation/physical-damage/missing-parts/corner"),
    ("MARGIN", "condition/preservation/physical-damage/missing-parts/margin"),
    ("MISSING_PARTS_TEXT_AREA", "condition/preservation/physical-damage/missing-parts/text-area"),
    ("FOLDS", "condition/preservation/physical-damage/folds"),
    ("CREASES", "condition/preservation/physical-damage/creases"),
    ("CUTS", "condition/preservation/physical-damage/cuts"),
    ("BINDING_DAMAGE", "condition/preservation/physical-damage/binding-damage"),
    ("BROKEN_SPINE", "condition/preservation/physical-damage/binding-damage/broken-spine"),
    ("LOOSE_PAGES", "condition/preservation/physical-damage/binding-damage/loose-pages"),
    ("MISSING_COVER", "condition/preservation/physical-damage/binding-damage/missing-cover"),
    ("DETACHED_BOARDS", "condition/preservation/physical-damage/binding-damage/detached-boards"),
    ("CHEMICAL_DAMAGE", "condition/preservation/chemical-damage"),
    ("FOXING", "condition/preservation/chemical-damage/foxing"),
    ("YELLOWING", "condition/preservation/chemical-damage/yellowing"),
    ("BROWNING", "condition/preservation/chemical-damage/browning"),
    ("INK_CORROSION", "condition/preservation/chemical-damage/ink-corrosion"),
    ("ACID_MIGRATION", "condition/preservation/chemical-damage/acid-migration"),
    ("FADING", "condition/preservation/chemical-damage/fading"),
    ("BIOLOGICAL_DAMAGE", "condition/preservation/biological-damage"),
    ("MOULD", "condition/preservation/biological-damage/mould"),
    ("INSECT_DAMAGE", "condition/preservation/biological-damage/insect-damage"),
    ("RODENT_DAMAGE", "condition/preservation/biological-damage/rodent-damage"),
    ("WATER_DAMAGE", "condition/preservation/water-damage"),
    ("STAINS", "condition/preservation/water-damage/stains"),
    ("TIDE_LINES", "condition/preservation/water-damage/tide-lines"),
    ("COCKLING", "condition/preservation/water-damage/cockling"),
    ("INK_WASHOUT", "condition/preservation/water-damage/ink-washout"),
    ("SOILING", "condition/preservation/soiling"),
    ("DIRT", "condition/preservation/soiling/dirt"),
    ("FINGERPRINTS", "condition/preservation/soiling/fingerprints"),
    ("STAMPS", "condition/preservation/soiling/stamps"),
    ("LIBRARY_STAMP", "condition/preservation/soiling/stamps/library-stamp"),
    ("OWNERSHIP_STAMP", "condition/preservation/soiling/stamps/ownership-stamp"),
    ("CENSORSHIP_STAMP", "condition/preservation/soiling/stamps/censorship-stamp"),
    ("LABELS", "condition/preservation/soiling/labels"),
    ("TAPE", "condition/preservation/soiling/tape"),
    ("WAX", "condition/preservation/soiling/wax"),
    ("PEN_MARKS", "condition/preservation/soiling/pen-marks"),
    ("PENCIL_MARKS", "condition/preservation/soiling/pencil-marks"),
    ("RESTORATION", "condition/preservation/restoration"),
    ("REPAIRED_TEARS", "condition/preservation/restoration/repaired-tears"),
    ("INLAID_PAPER", "condition/preservation/restoration/inlaid-paper"),
    ("LAMINATION", "condition/preservation/restoration/lamination"),
    ("RETOUCHING", "condition/preservation/restoration/retouching"),
    ("STORAGE", "condition/preservation/storage"),
    ("COMPRESSION_MARKS", "condition/preservation/storage/compression-marks"),
    ("SHELF_WEAR", "condition/preservation/storage/shelf-wear"),
    ("RUST_STAINS", "condition/preservation/storage/rust-stains"),
    ("ADHESIVE_RESIDUE", "condition/preservation/storage/adhesive-residue"),
    ("TRANSCRIPTION", "condition/transcription"),
    ("TEXT_RECOGNITION", "condition/transcription/text-recognition"),
    ("UNCERTAIN_READING", "condition/transcription/text-recognition/uncertain-reading"),
    ("ILLEGIBLE", "condition/transcription/text-recognition/illegible"),
    ("NORMALISED", "condition/transcription/text-recognition/normalised"),
    ("DIPLOMATIC", "condition/transcription/text-recognition/diplomatic"),
    ("SEGMENTATION", "condition/transcription/segmentation"),
    ("REGION_OVERLAP", "condition/transcription/segmentation/region-overlap"),
    ("LINE_OVERLAP", "condition/transcription/segmentation/line-overlap"),
    ("BASELINE_MISSING", "condition/transcription/segmentation/baseline-missing"),
    ("READING_ORDER_AMBIGUOUS", "condition/transcription/segmentation/reading-order-ambiguous"),
    ("WORD_OVERLAP", "condition/transcription/segmentation/word-overlap"),
    ("GLYPH_MISSING", "condition/transcription/segmentation/glyph-missing"),
    ("CHARACTERS", "condition/transcription/characters"),
    ("UNKNOWN_GLYPH", "condition/transcription/characters/unknown-glyph"),
    ("PRIVATE_USE_AREA", "condition/transcription/characters/private-use-area"),
    ("COMBINING_MARKS", "condition/transcription/characters/combining-marks"),
    ("HISTORICAL_PUNCTUATION", "condition/transcription/characters/historical-punctuation"),
    ("NUMERALS", "condition/transcription/characters/numerals"),
    ("CURRENCY_SYMBOLS", "condition/transcription/characters/currency-symbols"),
    ("UNICODE_NORMALIZATION", "condition/transcription/characters/unicode-normalization"),
    ("WHITESPACE", "condition/transcription/characters/whitespace"),
    ("WORDS", "condition/transcription/words"),
    ("HYPHENATION", "condition/transcription/words/hyphenation"),
    ("LINE_BREAK_HYPHEN", "condition/transcription/words/line-break-hyphen"),
    ("SPLIT_WORDS", "condition/transcription/words/split-words"),
    ("JOINED_WORDS", "condition/transcription/words/joined-words"),
    ("ABBREVIATED", "condition/transcription/words/abbreviated"),
    ("REGIONS", "condition/transcription/regions"),
    ("PARAGRAPH", "condition/transcription/regions/paragraph"),
    ("HEADING", "condition/transcription/regions/heading"),
    ("CAPTION", "condition/transcription/regions/caption"),
    ("HEADER", "condition/transcription/regions/header"),
    ("FOOTER", "condition/transcription/regions/footer"),
    ("PAGE_NUMBER", "condition/transcription/regions/page-number"),
    ("TABLE", "condition/transcription/regions/table"),
    ("GRAPHIC", "condition/transcription/regions/graphic"),
    ("SEPARATOR", "condition/transcription/regions/separator"),
    ("REGIONS_NOISE", "condition/transcription/regions/noise"),
    ("REGIONS_MARGINALIA", "condition/transcription/regions/marginalia"),
    ("DROP_CAPITAL", "condition/transcription/regions/drop-capital"),
    ("SIGNATURE_MARK", "condition/transcription/regions/signature-mark"),
    ("CATCH_WORD", "condition/transcription/regions/catch-word"),
    ("QUALITY", "condition/transcription/quality"),
    ("GOLD_STANDARD", "condition/transcription/quality/gold-standard"),
    ("SILVER_STANDARD", "condition/transcription/quality/silver-standard"),
    ("AUTOMATIC", "condition/transcription/quality/automatic"),
    ("CORRECTED", "condition/transcription/quality/corrected"),
    ("ENCODING", "condition/transcription/encoding"),
    ("UNICODE", "condition/transcription/encoding/unicode"),
    ("MUFI", "condition/transcription/encoding/mufi"),
    ("ASCII_ONLY", "condition/transcription/encoding/ascii-only"),
    ("PRIVATE_ENCODING", "condition/transcription/encoding/private-encoding"),
];
