use super::{preamble, AgentDefinition};
use crate::prompts::EDUCATOR;
use crate::stage::Prompt;
use crate::stages::{FanOutAxis, FanOutStage, FinalizeStage, Flag, PromptStage, ResultCompiler};
use eduflow_core::Capabilities;

const CULTURAL_ANALYSIS: &str = "\
Analyze the cultural context for educational content generation:
Topic: {prompt}
Target Grades: {grades}
Languages: {languages}

Consider:
1. Regional cultural relevance
2. Festival and tradition connections
3. Local community examples
4. Historical and geographical context
5. Social and economic relevance

Provide cultural adaptation recommendations.";

const CONTENT_OUTLINE: &str = "\
Create a comprehensive content outline for:
Topic: {prompt}
Grades: {grades}
Languages: {languages}
Content Source: {content_source}

Cultural Context: {cultural_analysis}

Generate a structured outline including:
1. Learning objectives
2. Key concepts and subtopics
3. Cultural connections and examples
4. Activity suggestions
5. Assessment methods
6. Resource requirements

Format as a detailed educational outline.";

const LANGUAGE_SYSTEM: &str = "You are an expert {language} educator specializing in creating culturally relevant content for Indian students.";

const LANGUAGE_CONTENT: &str = "\
Based on the content outline, create detailed educational content in {language}:

Outline: {content_outline}

Requirements:
- Use appropriate {language} vocabulary for grades {grades}
- Include cultural examples relevant to {language}-speaking regions
- Maintain educational rigor while being culturally sensitive
- Use simple, clear language suitable for the target grades
- Include interactive elements and questions

Create comprehensive educational content in {language}.";

const GRADE_SYSTEM: &str = "You are an expert in Grade {grade} pedagogy and curriculum design.";

const GRADE_ADAPTATION: &str = "\
Adapt the following content for Grade {grade} students:

Original Content:
{multilingual_content}

Adaptation requirements for Grade {grade}:
- Adjust vocabulary and complexity level
- Modify examples to be age-appropriate
- Ensure cognitive load is suitable
- Include grade-specific activities
- Align with Grade {grade} curriculum standards

Create grade-appropriate version.";

const CULTURAL_INTEGRATION: &str = "\
Finalize the educational content by integrating cultural elements:

Grade-Adapted Content:
{grade_adapted_content}
Cultural Analysis: {cultural_analysis}

Integration tasks:
1. Add relevant cultural stories and examples
2. Include festival and tradition connections
3. Incorporate local geographical and historical references
4. Add community relevance and practical applications
5. Ensure sensitivity to diverse cultural backgrounds
6. Create engaging, culturally rich learning experiences

Produce final, culturally integrated educational content.";

pub fn content_generation() -> AgentDefinition {
    let workflow = preamble("content-generation")
        .stage(PromptStage::new(
            "cultural_analysis",
            "cultural_analysis",
            Prompt::new(EDUCATOR, CULTURAL_ANALYSIS),
            "Cultural context analyzed",
        ))
        .stage(PromptStage::new(
            "outline_generation",
            "content_outline",
            Prompt::new(EDUCATOR, CONTENT_OUTLINE),
            "Content outline generated",
        ))
        .stage(FanOutStage::new(
            "multilingual_generation",
            "multilingual_content",
            FanOutAxis::Languages,
            Prompt::new(LANGUAGE_SYSTEM, LANGUAGE_CONTENT),
            "Content created in {count} languages",
        ))
        .stage(FanOutStage::new(
            "grade_adaptation",
            "grade_adapted_content",
            FanOutAxis::Grades,
            Prompt::new(GRADE_SYSTEM, GRADE_ADAPTATION),
            "Content adapted for {count} grade levels",
        ))
        .stage(
            ResultCompiler::new(
                "cultural_integration",
                "{response}",
                "Cultural elements integrated and content finalized",
            )
            .closing(Prompt::new(EDUCATOR, CULTURAL_INTEGRATION))
            .flag("content_type", Flag::text("culturally_integrated_educational_content"))
            .flag("grades_covered", Flag::Grades)
            .flag("languages_included", Flag::Languages)
            .flag("cultural_elements", Flag::yes())
            .flag("curriculum_alignment", Flag::ContentSource),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "content-generation",
        name: "Hyper-Local Content Generator",
        capabilities: Capabilities::new(
            "Generate culturally relevant educational content",
            &[
                "Multi-language content generation (10 Indian languages)",
                "NCERT curriculum alignment",
                "Cultural context integration",
                "Grade-appropriate language and complexity",
                "Regional example integration",
                "Festival and tradition incorporation",
            ],
            &["text", "structured_lessons", "activities", "assessments"],
            &["cultural_adaptation", "multilingual_content", "local_examples"],
        ),
        workflow,
    }
}

const COMPLEXITY_ANALYSIS: &str = "\
Analyze content complexity for differentiation:
Content: {prompt}
Target Grades: {grades}

Complexity Analysis:
1. Identify key concepts and their difficulty levels
2. Determine prerequisite knowledge for each grade
3. Assess vocabulary complexity requirements
4. Evaluate cognitive load for different ages
5. Note abstract vs concrete thinking needs
6. Identify scaffolding opportunities

Provide detailed complexity analysis for differentiation planning.";

const BASE_CONTENT: &str = "\
Create foundational content structure:
Topic: {prompt}
Complexity Analysis: {complexity_analysis}

Base Content Creation:
1. Core concepts that remain consistent across grades
2. Essential learning outcomes for all levels
3. Fundamental vocabulary and terminology
4. Universal examples and applications
5. Common assessment criteria
6. Shared resources and materials

Create comprehensive base content structure.";

const DIFFERENTIATION: &str = "\
Create Grade {grade} differentiated version:
Base Content: {base_content}
Complexity Analysis: {complexity_analysis}

Grade {grade} Differentiation:
1. Adjust vocabulary to grade-appropriate level
2. Modify concept complexity and depth
3. Adapt examples to age-relevant contexts
4. Create grade-specific activities
5. Design appropriate assessments
6. Include necessary scaffolding elements

Create complete Grade {grade} version.";

const SCAFFOLDING: &str = "\
Create scaffolding and support materials:
Differentiated Content:
{differentiated_content}

Scaffolding Creation:
1. Bridge activities between grade levels
2. Additional support for struggling learners
3. Extension activities for advanced students
4. Visual supports and graphic organizers
5. Step-by-step guides and checklists
6. Peer collaboration structures

Compile final differentiated materials package.";

const MATERIALS_PACKAGE: &str = "\
DIFFERENTIATED EDUCATIONAL MATERIALS

Topic: {prompt}
Grade Levels: {grades}
Languages: {languages}

GRADE-SPECIFIC VERSIONS:
{excerpt:differentiated_content}

SCAFFOLDING AND SUPPORT:
{response}

DIFFERENTIATION STRATEGY:
{complexity_analysis}";

pub fn differentiated_materials() -> AgentDefinition {
    let workflow = preamble("differentiated-materials")
        .stage(PromptStage::new(
            "complexity_analysis",
            "complexity_analysis",
            Prompt::new(
                "You are an expert in cognitive development and educational complexity analysis.",
                COMPLEXITY_ANALYSIS,
            ),
            "Content complexity analyzed for differentiation",
        ))
        .stage(PromptStage::new(
            "base_content_creation",
            "base_content",
            Prompt::new(EDUCATOR, BASE_CONTENT),
            "Foundational content structure created",
        ))
        .stage(FanOutStage::new(
            "grade_differentiation",
            "differentiated_content",
            FanOutAxis::Grades,
            Prompt::new(
                "You are an expert in Grade {grade} pedagogy and age-appropriate content design.",
                DIFFERENTIATION,
            ),
            "Created differentiated versions for {count} grade levels",
        ))
        .stage(
            ResultCompiler::new(
                "scaffolding_creation",
                MATERIALS_PACKAGE,
                "Scaffolding materials created and package compiled",
            )
            .closing(Prompt::new(
                "You are an expert in educational scaffolding and learning support design.",
                SCAFFOLDING,
            ))
            .flag("material_type", Flag::text("differentiated_multi_grade_materials"))
            .flag("grades_covered", Flag::Grades)
            .flag("differentiation_levels", Flag::GradeCount)
            .flag("includes_scaffolding", Flag::yes())
            .flag("adaptation_focus", Flag::text("cognitive_and_linguistic")),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "differentiated-materials",
        name: "Differentiated Materials Creator",
        capabilities: Capabilities::new(
            "Create differentiated materials for multiple grade levels",
            &[
                "Multi-grade content adaptation",
                "Cognitive load adjustment",
                "Vocabulary level modification",
                "Concept complexity scaling",
                "Activity differentiation",
                "Assessment level variation",
                "Visual support adaptation",
            ],
            &["layered_materials", "grade_specific_versions", "scaffolded_content"],
            &["grade_level_adaptation", "cognitive_scaffolding", "complexity_management"],
        ),
        workflow,
    }
}
