//! The embedded guide: creating an SAP Fiori tile that launches a transaction code.

use crate::types::{Guide, Hero, PageMeta, PrerequisiteItem, ProcedureStep, Screenshot, Section};

static STEPS: [ProcedureStep; 6] = [
    ProcedureStep {
        title: "Launch SAP Fiori Launchpad Designer",
        description: "Open the SAP Fiori Launchpad Designer in your SAP S/4HANA or SAP Business Suite \
            system. Use transaction /UI2/FLPD_CUST in the SAP GUI (for customizing environments) or \
            /UI2/FLPD_CONF (for cross-client configuration). Verify that you have the SAP_UI2_ADMIN \
            and relevant authorizations before proceeding.",
        highlights: &[
            "Use the SAP GUI command field to run /UI2/FLPD_CUST, then log in with your SAP credentials.",
            "Confirm that the tile catalog and group lists are available in the left navigation panel.",
            "Check the system role (client-specific vs. cross-client) so you know whether your changes \
                affect only your client or the entire landscape.",
        ],
        screenshot: Screenshot {
            path: "/screenshots/01-launchpad-designer.svg",
            alt_text: "Launchpad Designer home screen overview",
        },
    },
    ProcedureStep {
        title: "Create or Open a Tile Catalog",
        description: "Tiles live inside catalogs. If you need a fresh catalog, choose the \u{201c}Create \
            Catalog\u{201d} button and provide an ID (technical name) and a meaningful title. Otherwise, \
            open the catalog that should host your tile. Catalogs define which tiles become available \
            for assignment to roles and groups.",
        highlights: &[
            "Catalog IDs are technical identifiers (e.g., Z_FIN_APPR). Titles are user-facing; keep them \
                descriptive.",
            "Stick with a custom namespace (Z* or Y*) so that your content is transportable and distinct \
                from SAP-delivered objects.",
            "Add a catalog description with the intended business audience to help other administrators \
                understand its scope.",
        ],
        screenshot: Screenshot {
            path: "/screenshots/02-create-catalog.svg",
            alt_text: "Creating a new catalog in Launchpad Designer",
        },
    },
    ProcedureStep {
        title: "Add a Static App Launcher Tile",
        description: "Within the selected catalog, click \u{201c}+ Tile\u{201d} and choose \u{201c}App \
            Launcher \u{2013} Static.\u{201d} Fill out Tile Title, Subtitle (optional), and Keywords. The \
            title appears in the launchpad shell, so keep it user-friendly. Set semantic object and \
            action placeholders\u{2014}they will be tied to the target mapping later.",
        highlights: &[
            "Tile title and subtitle should clearly describe the business task (e.g., \u{201c}Display \
                Vendor Line Items\u{201d}).",
            "Use keywords to improve searchability in the launchpad, separating words with spaces or \
                commas.",
            "Set an icon via the Icon tab (for example, sap-icon://Fiori2/F0115) to improve recognition.",
        ],
        screenshot: Screenshot {
            path: "/screenshots/03-add-tile.svg",
            alt_text: "Dialog for creating a new static tile",
        },
    },
    ProcedureStep {
        title: "Define Target Mapping to a Transaction Code",
        description: "Target mappings turn a tile tap into an action. In the catalog, switch to the \
            \u{201c}Target Mappings\u{201d} tab and choose \u{201c}Create Target Mapping.\u{201d} Enter the \
            same semantic object/action you used for the tile. For transaction codes, set the \
            application type to \u{201c}Transaction,\u{201d} specify the SAP GUI transaction (e.g., FB03), \
            and choose the correct target (GUI for HTML with parameter GUI=HTML if you want SAP GUI \
            for HTML).",
        highlights: &[
            "Ensure the semantic object/action is unique per destination to avoid routing conflicts.",
            "Set the Launchpad target as \u{201c}Transaction\u{201d} and fill the Transaction field with the \
                desired t-code.",
            "Use parameters if the transaction requires preset values (for example, SKIP first screen \
                = X).",
        ],
        screenshot: Screenshot {
            path: "/screenshots/04-target-mapping.svg",
            alt_text: "Configuring target mapping for a tile to a tcode",
        },
    },
    ProcedureStep {
        title: "Assign the Tile to a Launchpad Group",
        description: "Groups define what tiles users actually see on their home page. Navigate to the \
            Groups section in the launchpad designer, open an existing group, or create a new one. Use \
            \u{201c}Add Tile\u{201d} and select the tile from the catalog you just configured. The tile \
            now appears in the group layout preview.",
        highlights: &[
            "Group IDs follow the same naming conventions as catalogs (use Z* or Y* for custom content).",
            "Drag and drop tiles to reorder them within the group grid for better usability.",
            "Use the visibility toggle if you want to hide the tile temporarily while still keeping the \
                configuration.",
        ],
        screenshot: Screenshot {
            path: "/screenshots/05-assign-group.svg",
            alt_text: "Adding the tile to a group layout",
        },
    },
    ProcedureStep {
        title: "Transport and Test the Tile",
        description: "Save your changes and collect the catalog, tile, and target mapping into a \
            transport request if you are in a customizing client. Assign the catalog (through a role) \
            to the target user. Log in to the SAP Fiori Launchpad as the end user and verify that the \
            tile opens the desired transaction code in SAP GUI for HTML or SAP GUI for Windows via SAP \
            Business Client.",
        highlights: &[
            "Use transaction /UI2/FLP_CONF_DEF to double-check the configuration if something fails to \
                launch.",
            "Run SU24 to confirm authorization objects for the target transaction are maintained.",
            "Ask end users to clear browser cache or use \u{201c}/UI2/CHIP_SYNCH\u{201d} to synchronize \
                personalized tiles if updates are missing.",
        ],
        screenshot: Screenshot {
            path: "/screenshots/06-test-transport.svg",
            alt_text: "Testing the tile in the SAP Fiori Launchpad",
        },
    },
];

static PREREQUISITES: [PrerequisiteItem; 4] = [
    PrerequisiteItem("SAP Fiori Launchpad Designer access (transaction /UI2/FLPD_CUST or /UI2/FLPD_CONF)."),
    PrerequisiteItem(
        "SAP Front-End Server (FES) with SAP_UI component level 7.50 or above for latest designer \
            features.",
    ),
    PrerequisiteItem(
        "Authorizations: SAP_UI2_ADMIN, S_TCODE for target transactions, and S_RFC for Launchpad \
            runtime as needed.",
    ),
    PrerequisiteItem(
        "Transport request if working in a customizing client and changes must move to QA/Production \
            environments.",
    ),
];

static VALIDATION_TIPS: [Section; 3] = [
    Section {
        heading: "Runtime checks",
        body: "Launch the tile on the SAP Fiori Launchpad and ensure the target transaction opens \
            without authorization errors. Use the browser developer console to check for HTTP 403 or \
            500 responses if the tile fails.",
    },
    Section {
        heading: "Authorization trace",
        body: "Run transaction ST01 or SU53 after attempting to open the tile to identify missing \
            authorization objects. Adjust the assigned role and catalogs if required.",
    },
    Section {
        heading: "Transport sequencing",
        body: "Transport the catalog before the group so that target mappings exist when the group is \
            imported. Include PFCG role updates in the same transport wave.",
    },
];

static GUIDE: Guide = Guide {
    meta: PageMeta {
        title: "SAP Fiori Tile to T-Code Guide",
        description: "Step-by-step walkthrough for creating a SAP Fiori tile and linking it to a \
            transaction code.",
    },
    hero: Hero {
        eyebrow: "SAP HANA & Fiori Administration",
        heading: "Build a Fiori Tile for Your Transaction Code",
        lede: "Follow this practitioner-oriented guide to design a tile, configure its target mapping, \
            assign it to a group, and verify the end-to-end launch of any SAP GUI transaction inside \
            the SAP Fiori launchpad.",
    },
    prerequisites: &PREREQUISITES,
    overview: Section {
        heading: "Procedure Overview",
        body: "The workflow below mirrors how SAP administrators configure tile content in productive \
            landscapes. Each stage includes context, rationale, and a visual cue so you can replicate \
            the configuration confidently.",
    },
    steps: &STEPS,
    validation_tips: &VALIDATION_TIPS,
};

/// The guide rendered by the `tileguide` binary.
pub fn guide() -> &'static Guide {
    &GUIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_guide_shape() {
        let g = guide();
        assert_eq!(g.steps.len(), 6);
        assert_eq!(g.prerequisites.len(), 4);
        assert_eq!(g.validation_tips.len(), 3);
        assert_eq!(g.steps[0].title, "Launch SAP Fiori Launchpad Designer");
    }

    #[test]
    fn line_continuations_leave_single_spaces() {
        let g = guide();
        let texts = g
            .steps
            .iter()
            .flat_map(|s| std::iter::once(s.description).chain(s.highlights.iter().copied()))
            .chain(g.prerequisites.iter().map(|p| p.as_str()))
            .chain(g.validation_tips.iter().map(|t| t.body));
        for text in texts {
            assert!(!text.contains("  "), "double space in: {text}");
            assert!(!text.contains('\n'), "newline in: {text}");
        }
    }
}
