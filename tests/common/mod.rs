//! Shared fixture: a small results directory covering both assemblers.

use std::path::Path;

pub const MYLOASM_HEADERS: &str = "\
>u1_len-1200000_circular-yes_depth-35.2
ACGTACGTACGT
>u2_len-500000_circular-possible_depth-10
ACGT
>u3_len-80000_circular-no_depth-4.5
>broken header line
";

pub const METAMDBG_HEADERS: &str = "\
>ctg1 length=600000 coverage=20 circular=YES
>ctg2 length=3000 coverage=2.5 circular=no
>ctg3 coverage=7 circular=yes
";

const MYLOASM_CHECKM2: &str = "\
Name\tCompleteness\tContamination\tCompleteness_Model_Used
u1\t95\t2\tNeural Network (Specific Model)
u2\t60\t8\tNeural Network (Specific Model)
";

const METAMDBG_CHECKM2: &str = "\
Name\tCompleteness\tContamination\tCompleteness_Model_Used
ctg2\t92\t6\tGradient Boost (General Model)
";

const MYLOASM_BAC: &str = "\
user_genome\tclassification\tfastani_reference
u1\td__Bacteria;p__Bacillota;c__Bacilli;o__;f__;g__;s__\tN/A
u3\td__Bacteria;p__Pseudomonadota;c__Gammaproteobacteria\tN/A
ctg9\tUnclassified Bacteria\tN/A
";

const MYLOASM_AR: &str = "\
user_genome\tclassification\tfastani_reference
u2\td__Archaea;p__Unclassified Archaea\tN/A
u3\td__Archaea;p__Thermoproteota;c__Nitrososphaeria\tN/A
";

const METAMDBG_BAC: &str = "\
user_genome\tclassification\tfastani_reference
ctg2\td__Bacteria;p__Actinomycetota;c__Actinomycetes\tN/A
";

const METAMDBG_AR: &str = "user_genome\tclassification\tfastani_reference\n";

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Populate `dir` with the standard results layout
pub fn write_results_dir(dir: &Path) {
    write(&dir.join("myloasm_assembly_headers.txt"), MYLOASM_HEADERS);
    write(&dir.join("metamdbg_assembly_headers.txt"), METAMDBG_HEADERS);
    write(
        &dir.join("checkm2/myloasm/quality_report.tsv"),
        MYLOASM_CHECKM2,
    );
    write(
        &dir.join("checkm2/metamdbg/quality_report.tsv"),
        METAMDBG_CHECKM2,
    );
    write(
        &dir.join("gtdbtk/myloasm/classify/gtdbtk.bac120.summary.tsv"),
        MYLOASM_BAC,
    );
    write(
        &dir.join("gtdbtk/myloasm/classify/gtdbtk.ar53.summary.tsv"),
        MYLOASM_AR,
    );
    write(
        &dir.join("gtdbtk/metamdbg/classify/gtdbtk.bac120.summary.tsv"),
        METAMDBG_BAC,
    );
    write(
        &dir.join("gtdbtk/metamdbg/classify/gtdbtk.ar53.summary.tsv"),
        METAMDBG_AR,
    );
}
